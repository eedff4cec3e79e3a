use actix_web::web;

pub mod auth;
pub mod backend_health;
pub mod comments;
pub mod health;
pub mod league;
pub mod profile;
pub mod registration;
pub mod sync;

use crate::middleware::admin::AdminMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health)
        .service(health::health)
        .service(auth::login);

    // Public league data
    cfg.service(league::standings)
        .service(league::list_matches)
        .service(league::match_detail);

    // Authenticated per-route via `wrap`
    cfg.service(profile::get_profile)
        .service(comments::post_comment);

    // Sync triggers
    cfg.service(sync::update_data_cron);
    cfg.service(
        web::scope("/admin")
            .wrap(AdminMiddleware)
            .service(sync::admin_sync)
    );
}
