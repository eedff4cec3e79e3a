//! Bootstraps an admin account.
//!
//! Usage: `create_admin <email> <username> <password>`

use std::process::ExitCode;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;

use teamtalk_backend::config::settings::get_config;
use teamtalk_backend::db::users::{self, NewUser};
use teamtalk_backend::telemetry::{get_subscriber, init_subscriber};
use teamtalk_backend::utils::password::hash_password;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [email, username, password] = match <[String; 3]>::try_from(args) {
        Ok(args) => args,
        Err(_) => {
            eprintln!("Usage: create_admin <email> <username> <password>");
            return ExitCode::from(1);
        }
    };

    let config = match get_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read the config: {}", e);
            return ExitCode::from(1);
        }
    };

    let subscriber = get_subscriber("create-admin".into(), config.application.log_level.clone(), std::io::stdout);
    init_subscriber(subscriber);

    let pool = match PgPoolOptions::new()
        .max_connections(1)
        .connect(config.database.connection_string().expose_secret())
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("❌ Failed to connect to Postgres: {}", e);
            return ExitCode::from(1);
        }
    };

    if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
        tracing::error!("❌ Failed to run database migrations: {}", e);
        return ExitCode::from(1);
    }

    match users::get_user_by_email(&pool, &email).await {
        Ok(Some(existing)) => {
            println!("A user with email {} already exists ({}).", email, existing.username);
            return ExitCode::SUCCESS;
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("❌ Failed to look up {}: {}", email, e);
            return ExitCode::from(1);
        }
    }

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("❌ Failed to hash password: {}", e);
            return ExitCode::from(1);
        }
    };

    let new_user = NewUser {
        username: &username,
        email: &email,
        password_hash: &password_hash,
        favorite_team: None,
        is_admin: true,
    };

    match users::create_user(&pool, new_user).await {
        Ok(user) => {
            println!("Admin user {} created with id {}.", user.username, user.id);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("❌ Failed to create admin user: {}", e);
            ExitCode::from(1)
        }
    }
}
