use actix_web::{web, HttpResponse, Result};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::db::helpers::{ensure_not_exists, unique_violation_or_error};
use crate::db::users::{self, NewUser};
use crate::models::common::ApiResponse;
use crate::models::user::{RegistrationRequest, UserResponse};
use crate::ok_or_return;
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show arguments
    skip(user_form, pool),
    fields(
        username = %user_form.username,
        email = %user_form
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(message) = user_form.validate() {
        tracing::info!("Rejected registration: {}", message);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(message)));
    }

    let username = user_form.username.trim();
    let email = user_form.email.trim();

    ok_or_return!(ensure_not_exists(
        users::get_user_by_username(pool.get_ref(), username).await,
        "Username already exists",
    ));
    ok_or_return!(ensure_not_exists(
        users::get_user_by_email(pool.get_ref(), email).await,
        "Email address already registered",
    ));

    let password_hash = match hash_password(user_form.password.expose_secret()) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Failed to hash password: {:?}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Failed to register user")));
        }
    };

    let favorite_team = user_form
        .favorite_team
        .as_deref()
        .map(str::trim)
        .filter(|team| !team.is_empty());

    let new_user = NewUser {
        username,
        email,
        password_hash: &password_hash,
        favorite_team,
        is_admin: false,
    };

    match users::create_user(pool.get_ref(), new_user).await {
        Ok(user) => {
            tracing::info!("Registered user {}", user.id);
            Ok(HttpResponse::Created().json(UserResponse::from(user)))
        }
        // Lost a race against a concurrent registration
        Err(e) => Ok(unique_violation_or_error(e, "Username or email already registered")),
    }
}
