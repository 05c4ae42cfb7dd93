mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod queries;
mod routes;
mod schema;
mod utils;

#[cfg(test)]
mod test_utils;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use crate::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let pool = db::build_pool(&config.database_url, config.pool_size)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    {
        let mut conn = db::get_conn(&pool).map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        db::run_migrations(&mut conn).map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    }

    if config.legacy_login {
        log::warn!("LEGACY_LOGIN is enabled: passwords are not verified on login");
    }

    let (host, port) = config.socket_addr();
    log::info!("Starting server on {host}:{port} (database: {})", config.database_url);

    let config_data = web::Data::new(config);
    let pool_data = web::Data::new(pool);

    HttpServer::new(move || {
        App::new()
            .app_data(pool_data.clone())
            .app_data(config_data.clone())
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
