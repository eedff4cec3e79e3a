use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings::CommentSettings;
use crate::db::helpers::db_result;
use crate::db::{comments, matches};
use crate::middleware::auth::Claims;
use crate::models::comment::{validate_comment_text, CommentWithAuthor, CreateCommentRequest};
use crate::models::common::ApiResponse;
use crate::ok_or_return;

#[tracing::instrument(
    name = "Post match comment",
    skip(body, pool, claims, comment_settings),
    fields(username = %claims.username)
)]
pub async fn create_match_comment(
    match_id: Uuid,
    body: web::Json<CreateCommentRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    comment_settings: web::Data<CommentSettings>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            tracing::error!("Invalid user ID in claims: {}", claims.sub);
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")));
        }
    };

    let text = match validate_comment_text(&body.text, comment_settings.max_length) {
        Ok(text) => text,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.message())));
        }
    };

    let exists = ok_or_return!(db_result(matches::match_exists(pool.get_ref(), match_id).await));
    if !exists {
        return Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found")));
    }

    let comment = ok_or_return!(db_result(
        comments::create_comment(pool.get_ref(), user_id, match_id, text).await
    ));
    tracing::info!("Comment {} posted on match {}", comment.id, match_id);

    Ok(HttpResponse::Created().json(CommentWithAuthor {
        id: comment.id,
        text: comment.text,
        created_at: comment.created_at,
        user_id: comment.user_id,
        username: claims.username.clone(),
    }))
}
