use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use sqlx::PgPool;
use std::net::TcpListener;
use std::sync::Arc;
use actix_cors::Cors;

pub mod config;
pub mod telemetry;
mod routes;
mod handlers;
pub mod models;
pub mod utils;
mod middleware;
pub mod db;
pub mod sync;
pub mod services;
use crate::routes::init_routes;
use crate::config::jwt::JwtSettings;
use crate::config::settings::CommentSettings;
use crate::config::sync::SyncSettings;
use crate::services::SyncService;

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    jwt_settings: JwtSettings,
    comment_settings: CommentSettings,
    sync_settings: SyncSettings,
    sync_service: Arc<SyncService>,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let jwt_settings = web::Data::new(jwt_settings);
    let comment_settings = web::Data::new(comment_settings);
    let sync_settings = web::Data::new(sync_settings);
    let sync_service = web::Data::new(sync_service);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:5173")
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(db_pool_data.clone())
            .app_data(jwt_settings.clone())
            .app_data(comment_settings.clone())
            .app_data(sync_settings.clone())
            .app_data(sync_service.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
