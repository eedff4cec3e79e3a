use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

pub async fn backend_health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "UP" }))
}

/// Reports whether the database answers a trivial query.
#[tracing::instrument(name = "Database health check", skip(pool))]
pub async fn database_health_check(pool: web::Data<PgPool>) -> HttpResponse {
    match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(json!({
            "status": "healthy",
            "database": "connected"
        })),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "status": "unhealthy",
                "error": e.to_string()
            }))
        }
    }
}
