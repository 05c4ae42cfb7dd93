use actix_web::{web, HttpResponse, Responder};

use crate::db::{self, DbPool};
use crate::queries::catalog_queries;

pub async fn list_songs(pool: web::Data<DbPool>) -> impl Responder {
    match db::run(&pool, catalog_queries::list_songs).await {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => e.respond("Failed to fetch songs"),
    }
}

pub async fn get_song(pool: web::Data<DbPool>, song_id_param: web::Path<i32>) -> impl Responder {
    let song_id = song_id_param.into_inner();

    match db::run(&pool, move |conn| catalog_queries::get_song(conn, song_id)).await {
        Ok(song) => HttpResponse::Ok().json(song),
        Err(e) => e.respond("Failed to fetch song"),
    }
}

pub async fn list_songs_by_artist(pool: web::Data<DbPool>, artist_id_param: web::Path<i32>) -> impl Responder {
    let artist_id = artist_id_param.into_inner();

    match db::run(&pool, move |conn| catalog_queries::list_songs_by_artist(conn, artist_id)).await {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => e.respond("Failed to fetch songs"),
    }
}
