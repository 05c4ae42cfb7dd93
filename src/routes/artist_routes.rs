use actix_web::web;

use crate::handlers::artist_handlers::{get_artist, list_artists};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/artists")
            .route("", web::get().to(list_artists))
            .route("/{artist_id}", web::get().to(get_artist))
    );
}
