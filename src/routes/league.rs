use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::match_handler::{get_match_detail, list_matches as list_matches_handler};
use crate::handlers::standings_handler::get_standings;
use crate::models::matches::MatchListQuery;

#[get("/standings")]
async fn standings(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    get_standings(pool).await
}

#[get("/matches")]
async fn list_matches(
    query: web::Query<MatchListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    list_matches_handler(query, pool).await
}

#[get("/matches/{match_id}")]
async fn match_detail(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    get_match_detail(path.into_inner(), pool).await
}
