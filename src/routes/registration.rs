use actix_web::{post, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::registration_handler::register_user;
use crate::models::user::RegistrationRequest;

#[post("/register")]
async fn register(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    register_user(user_form, pool).await
}
