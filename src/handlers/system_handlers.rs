use actix_web::{web, HttpResponse, Responder};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::db::{self, DbPool};

#[actix_web::get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Music Player Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "artists": "/api/artists",
            "songs": "/api/songs",
            "playlists": "/api/playlists/{user_id}",
            "search": "/api/search?q=query",
            "health": "/api/health"
        }
    }))
}

/// Store reachability: one connection is checked out and handed straight back.
pub async fn health(pool: web::Data<DbPool>) -> impl Responder {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    match db::run(&pool, |_conn| Ok(())).await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "database": "connected",
            "timestamp": timestamp
        })),
        Err(e) => {
            log::error!("health check failed: {e}");
            HttpResponse::InternalServerError().json(json!({
                "status": "error",
                "database": "disconnected",
                "error": e.to_string(),
                "timestamp": timestamp
            }))
        }
    }
}
