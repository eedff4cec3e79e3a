use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::health_handler::database_health_check;

#[get("/api/v1/health")]
async fn health(pool: web::Data<PgPool>) -> HttpResponse {
    database_health_check(pool).await
}
