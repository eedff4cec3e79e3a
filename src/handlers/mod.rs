pub mod auth_handler;
pub mod comment_handler;
pub mod health_handler;
pub mod match_handler;
pub mod profile_handler;
pub mod registration_handler;
pub mod standings_handler;
pub mod sync_handler;
