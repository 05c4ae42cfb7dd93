use actix_web::web;

use crate::handlers::search_handlers::search;
use crate::handlers::system_handlers::health;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/search", web::get().to(search))
        .route("/health", web::get().to(health));
}
