use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;

use crate::db::helpers::{db_result, require_record};
use crate::db::users;
use crate::middleware::auth::Claims;
use crate::models::user::ProfileResponse;
use crate::ok_or_return;

#[tracing::instrument(
    name = "Get user profile",
    skip(pool, claims),
    fields(requested_by = %claims.username)
)]
pub async fn get_user_profile(
    username: &str,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user = ok_or_return!(require_record(
        users::get_user_by_username(pool.get_ref(), username).await,
        "User not found",
    ));
    let comment_count = ok_or_return!(db_result(
        users::count_user_comments(pool.get_ref(), user.id).await
    ));

    Ok(HttpResponse::Ok().json(ProfileResponse {
        username: user.username,
        favorite_team: user.favorite_team,
        bio: user.bio,
        join_date: user.join_date,
        is_admin: user.is_admin,
        comment_count,
    }))
}
