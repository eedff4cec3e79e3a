use actix_web::{post, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings::CommentSettings;
use crate::handlers::comment_handler::create_match_comment;
use crate::middleware::auth::{AuthMiddleware, Claims};
use crate::models::comment::CreateCommentRequest;

#[post("/matches/{match_id}/comments", wrap = "AuthMiddleware")]
async fn post_comment(
    path: web::Path<Uuid>,
    body: web::Json<CreateCommentRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    comment_settings: web::Data<CommentSettings>,
) -> Result<HttpResponse> {
    create_match_comment(path.into_inner(), body, pool, claims, comment_settings).await
}
