use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};
use sqlx::{PgPool, PgConnection, Connection, Executor};
use std::net::TcpListener;
use std::sync::Arc;
use uuid::Uuid;
use once_cell::sync::Lazy;
use reqwest::Client;

use teamtalk_backend::run;
use teamtalk_backend::config::fpl::FplSettings;
use teamtalk_backend::config::settings::{get_config, get_comment_settings, get_jwt_settings, DatabaseSettings};
use teamtalk_backend::services::{FplClient, SyncService};
use teamtalk_backend::telemetry::{get_subscriber, init_subscriber};

use crate::common::fpl_mock::MockFplApi;

pub const TEST_CRON_KEY: &str = "test-cron-key";

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub fpl: MockFplApi,
    pub sync_service: Arc<SyncService>,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_cron_key(Some(TEST_CRON_KEY)).await
}

pub async fn spawn_app_with_cron_key(cron_key: Option<&str>) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let fpl = MockFplApi::start().await;

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    configuration.database.db_url = None;
    configuration.sync.cron_api_key = cron_key.map(|key| SecretString::new(key.into()));

    let connection_pool = configure_db(&configuration.database).await;
    let jwt_settings = get_jwt_settings(&configuration);
    let comment_settings = get_comment_settings(&configuration);

    let fpl_client = FplClient::new(&FplSettings::new(&fpl.base_url))
        .expect("Failed to build FPL client");
    let sync_service = Arc::new(SyncService::new(connection_pool.clone(), fpl_client));

    let server = run(
        listener,
        connection_pool.clone(),
        jwt_settings,
        comment_settings,
        configuration.sync,
        sync_service.clone(),
    )
    .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
        fpl,
        sync_service,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(
            &config.connection_string_without_db()
        )
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate database
    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

pub struct RegisteredUser {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub token: String,
}

pub async fn register_user(app_address: &str, username: &str, email: &str, password: &str) -> reqwest::Response {
    Client::new()
        .post(&format!("{}/register", app_address))
        .json(&json!({
            "username": username,
            "email": email,
            "password": password
        }))
        .send()
        .await
        .expect("Failed to execute registration request.")
}

pub async fn login(app_address: &str, email: &str, password: &str) -> reqwest::Response {
    Client::new()
        .post(&format!("{}/login", app_address))
        .json(&json!({
            "email": email,
            "password": password
        }))
        .send()
        .await
        .expect("Failed to execute login request.")
}

pub async fn create_test_user_and_login(app_address: &str) -> RegisteredUser {
    let username = format!("fan{}", Uuid::new_v4().simple());
    let password = "password123";
    let email = format!("{}@example.com", username);

    let register_response = register_user(app_address, &username, &email, password).await;
    assert_eq!(register_response.status().as_u16(), 201);
    let registered: Value = register_response.json().await.expect("Failed to parse registration response");
    let user_id = registered["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("No user id in registration response");

    let login_response = login(app_address, &email, password).await;
    let login_body: Value = login_response.json().await.expect("Failed to parse login response");
    let token = login_body["token"].as_str().expect("No token in response");

    RegisteredUser {
        user_id,
        username,
        email,
        token: token.to_string(),
    }
}

/// Registers a user, promotes it in the database, then logs in so the token carries the admin flag.
pub async fn create_admin_and_login(app_address: &str, pool: &PgPool) -> RegisteredUser {
    let user = create_test_user_and_login(app_address).await;
    sqlx::query("UPDATE users SET is_admin = TRUE WHERE id = $1")
        .bind(user.user_id)
        .execute(pool)
        .await
        .expect("Failed to promote user to admin");

    let login_response = login(app_address, &user.email, "password123").await;
    let login_body: Value = login_response.json().await.expect("Failed to parse login response");
    let token = login_body["token"].as_str().expect("No token in response").to_string();

    RegisteredUser { token, ..user }
}

pub async fn trigger_cron(app_address: &str, key: Option<&str>) -> reqwest::Response {
    let url = match key {
        Some(key) => format!("{}/update-data-cron?key={}", app_address, key),
        None => format!("{}/update-data-cron", app_address),
    };
    Client::new()
        .get(&url)
        .send()
        .await
        .expect("Failed to execute cron trigger.")
}

pub async fn insert_team(pool: &PgPool, name: &str, position: i32) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO teams (id, name, short_name, position) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(name)
        .bind(&name[..3].to_uppercase())
        .bind(position)
        .execute(pool)
        .await
        .expect("Failed to insert team");
    id
}

pub async fn insert_match(
    pool: &PgPool,
    home_team_id: Uuid,
    away_team_id: Uuid,
    match_date: Option<DateTime<Utc>>,
    gameweek: Option<i32>,
) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO matches (id, home_team_id, away_team_id, match_date, status, gameweek) \
         VALUES ($1, $2, $3, $4, 'Scheduled', $5)",
    )
    .bind(id)
    .bind(home_team_id)
    .bind(away_team_id)
    .bind(match_date)
    .bind(gameweek)
    .execute(pool)
    .await
    .expect("Failed to insert match");
    id
}

/// Every row of `table` as JSON text, in primary key order.
pub async fn table_snapshot(pool: &PgPool, table: &str) -> Vec<String> {
    sqlx::query_scalar::<_, String>(&format!(
        "SELECT row_to_json(t)::text FROM {} t ORDER BY id",
        table
    ))
    .fetch_all(pool)
    .await
    .expect("Failed to snapshot table")
}
