use actix_web::web;

use crate::handlers::playlist_handlers::{
    list_playlists, create_playlist, delete_playlist,
    list_playlist_songs, add_song_to_playlist, remove_song_from_playlist
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Playlists. A single segment is the owner for GET and the playlist for DELETE.
    cfg.service(
        web::scope("/playlists")
            .route("", web::post().to(create_playlist))
            .route("/{user_id}", web::get().to(list_playlists))
            .route("/{playlist_id}", web::delete().to(delete_playlist))
            // Songs in Playlists
            .route("/{playlist_id}/songs", web::get().to(list_playlist_songs))
            .route("/{playlist_id}/songs", web::post().to(add_song_to_playlist))
            .route("/{playlist_id}/songs/{playlist_song_id}", web::delete().to(remove_song_from_playlist))
    );
}
