use actix_web::{web, HttpResponse, Responder, ResponseError};
use serde_json::json;

use crate::db::{self, DbPool};
use crate::errors::ServiceError;
use crate::models::playlist_models::{AddSongRequest, CreatePlaylistRequest, NewPlaylistSong, DEFAULT_TRACK_ORDER};
use crate::queries::playlist_queries;

// --------------------- Playlists ---------------------
pub async fn list_playlists(pool: web::Data<DbPool>, user_id_param: web::Path<i32>) -> impl Responder {
    let user_id = user_id_param.into_inner();

    match db::run(&pool, move |conn| playlist_queries::list_playlists(conn, user_id)).await {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => e.respond("Failed to fetch playlists"),
    }
}

pub async fn create_playlist(pool: web::Data<DbPool>, payload: web::Json<CreatePlaylistRequest>) -> impl Responder {
    let new_playlist = match payload.into_inner().into_new_playlist() {
        Some(p) => p,
        None => return ServiceError::bad_request("user_id and name required").error_response(),
    };

    match db::run(&pool, move |conn| playlist_queries::create_playlist(conn, new_playlist)).await {
        Ok(playlist_id) => HttpResponse::Created().json(json!({
            "success": true,
            "playlist_id": playlist_id,
            "message": "Playlist created successfully"
        })),
        Err(e) => e.respond("Failed to create playlist"),
    }
}

pub async fn delete_playlist(pool: web::Data<DbPool>, playlist_id_param: web::Path<i32>) -> impl Responder {
    let playlist_id = playlist_id_param.into_inner();

    match db::run(&pool, move |conn| playlist_queries::delete_playlist(conn, playlist_id)).await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Playlist deleted"
        })),
        Err(e) => e.respond("Failed to delete playlist"),
    }
}

// --------------------- Songs in Playlist ---------------------
pub async fn list_playlist_songs(pool: web::Data<DbPool>, playlist_id_param: web::Path<i32>) -> impl Responder {
    let playlist_id = playlist_id_param.into_inner();

    match db::run(&pool, move |conn| playlist_queries::get_playlist_songs(conn, playlist_id)).await {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => e.respond("Failed to fetch playlist songs"),
    }
}

pub async fn add_song_to_playlist(
    pool: web::Data<DbPool>,
    playlist_id_param: web::Path<i32>,
    payload: web::Json<AddSongRequest>,
) -> impl Responder {
    let data = payload.into_inner();
    let song_id = match data.song_id {
        Some(id) => id,
        None => return ServiceError::bad_request("song_id required").error_response(),
    };

    let new_song = NewPlaylistSong {
        playlist_id: playlist_id_param.into_inner(),
        song_id,
        track_order: data.track_order.unwrap_or(DEFAULT_TRACK_ORDER),
    };

    match db::run(&pool, move |conn| playlist_queries::add_song_to_playlist(conn, new_song)).await {
        Ok(link_id) => HttpResponse::Created().json(json!({
            "success": true,
            "playlist_song_id": link_id,
            "message": "Song added to playlist"
        })),
        Err(e) => e.respond("Failed to add song to playlist"),
    }
}

pub async fn remove_song_from_playlist(pool: web::Data<DbPool>, path: web::Path<(i32, i32)>) -> impl Responder {
    let (playlist_id, playlist_song_id) = path.into_inner();

    match db::run(&pool, move |conn| {
        playlist_queries::remove_song_from_playlist(conn, playlist_id, playlist_song_id)
    })
    .await
    {
        Ok(()) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Song removed from playlist"
        })),
        Err(e) => e.respond("Failed to remove song from playlist"),
    }
}
