use actix_web::{web, HttpResponse, Responder};

use crate::db::{self, DbPool};
use crate::queries::catalog_queries;

pub async fn list_artists(pool: web::Data<DbPool>) -> impl Responder {
    match db::run(&pool, catalog_queries::list_artists).await {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => e.respond("Failed to fetch artists"),
    }
}

pub async fn get_artist(pool: web::Data<DbPool>, artist_id_param: web::Path<i32>) -> impl Responder {
    let artist_id = artist_id_param.into_inner();

    match db::run(&pool, move |conn| catalog_queries::get_artist(conn, artist_id)).await {
        Ok(artist) => HttpResponse::Ok().json(artist),
        Err(e) => e.respond("Failed to fetch artist"),
    }
}
