use actix_web::web;

use crate::handlers::song_handlers::{get_song, list_songs, list_songs_by_artist};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/songs")
            .route("", web::get().to(list_songs))
            .route("/by-artist/{artist_id}", web::get().to(list_songs_by_artist))
            .route("/{song_id}", web::get().to(get_song))
    );
}
