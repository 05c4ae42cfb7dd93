use actix_web::web::{self, scope};

use crate::handlers::user_handlers::{get_user, login, signup};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        scope("/users")
            .route("/{user_id}", web::get().to(get_user))
    );

    cfg.service(
        scope("/auth")
            .route("/login", web::post().to(login))
            .route("/signup", web::post().to(signup))
    );
}
