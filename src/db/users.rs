use sqlx::postgres::PgExecutor;
use uuid::Uuid;

use crate::models::user::User;

const USER_COLUMNS: &str = "id, username, email, password_hash, favorite_team, bio, join_date, is_admin";

pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub favorite_team: Option<&'a str>,
    pub is_admin: bool,
}

pub async fn create_user<'e, E: PgExecutor<'e>>(executor: E, new_user: NewUser<'_>) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (id, username, email, password_hash, favorite_team, is_admin)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {}
        "#,
        USER_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(new_user.username)
    .bind(new_user.email)
    .bind(new_user.password_hash)
    .bind(new_user.favorite_team)
    .bind(new_user.is_admin)
    .fetch_one(executor)
    .await
}

pub async fn get_user_by_email<'e, E: PgExecutor<'e>>(executor: E, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS))
        .bind(email)
        .fetch_optional(executor)
        .await
}

pub async fn get_user_by_username<'e, E: PgExecutor<'e>>(
    executor: E,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE username = $1", USER_COLUMNS))
        .bind(username)
        .fetch_optional(executor)
        .await
}

pub async fn count_user_comments<'e, E: PgExecutor<'e>>(executor: E, user_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(executor)
        .await
}
