use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::profile_handler::get_user_profile;
use crate::middleware::auth::{AuthMiddleware, Claims};

#[get("/profile/{username}", wrap = "AuthMiddleware")]
async fn get_profile(
    path: web::Path<String>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let username = path.into_inner();
    get_user_profile(&username, pool, claims).await
}
