pub mod artist_routes;
pub mod playlist_routes;
pub mod song_routes;
pub mod system_routes;
pub mod user_routes;

use actix_web::web;

use crate::errors::{json_error_handler, not_found, path_error_handler, query_error_handler};
use crate::handlers::system_handlers::index;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(index)
        .service(
            web::scope("/api")
                .configure(artist_routes::configure)
                .configure(song_routes::configure)
                .configure(user_routes::configure)
                .configure(playlist_routes::configure)
                .configure(system_routes::configure)
        )
        .default_service(web::to(not_found));
}
