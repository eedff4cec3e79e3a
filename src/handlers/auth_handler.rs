use actix_web::{web, HttpResponse};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::config::jwt::JwtSettings;
use crate::db::users;
use crate::middleware::auth::Claims;
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::models::common::ApiResponse;
use crate::models::user::User;
use crate::utils::password::verify_password;

#[tracing::instrument(
    name = "Login user attempt",
    skip(login_form, pool, jwt_settings),
    fields(
        email = %login_form.email
    )
)]
pub async fn login_user(
    login_form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> HttpResponse {
    let user = match users::get_user_by_email(pool.get_ref(), login_form.email.trim()).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::info!("User not found or invalid credentials");
            return invalid_credentials();
        }
        Err(e) => {
            tracing::error!("Database error occurred: {:?}", e);
            return HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Database error"));
        }
    };

    if !verify_password(login_form.password.expose_secret(), &user.password_hash) {
        tracing::info!("Invalid password");
        return invalid_credentials();
    }

    match issue_token(&user, &jwt_settings) {
        Ok(token) => HttpResponse::Ok().json(LoginResponse { token }),
        Err(e) => {
            tracing::error!("Error generating JWT token: {:?}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Failed to generate token"))
        }
    }
}

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::<()>::error("Invalid email or password"))
}

/// Signs an HS256 token for `user`, valid for `expiration_hours`.
pub fn issue_token(user: &User, jwt_settings: &JwtSettings) -> Result<String, jsonwebtoken::errors::Error> {
    let expiration = (Utc::now() + Duration::hours(jwt_settings.expiration_hours)).timestamp() as usize;

    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        is_admin: user.is_admin,
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
    )
}
