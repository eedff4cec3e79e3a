use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;

use teamtalk_backend::run;
use teamtalk_backend::config::settings::{get_comment_settings, get_config, get_jwt_settings};
use teamtalk_backend::telemetry::{get_subscriber, init_subscriber};
use teamtalk_backend::services::{FplClient, SchedulerService, SyncService};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = match get_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read the config: {}", e);
            std::process::exit(1);
        }
    };

    let subscriber = get_subscriber(
        "teamtalk-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber);

    let jwt_settings = get_jwt_settings(&config);
    let comment_settings = get_comment_settings(&config);

    // Only try to establish connection when actually used
    let connection_pool = match PgPoolOptions::new()
        .max_connections(16)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .connect_lazy(config.database.connection_string().expose_secret())
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("❌ Failed to create Postgres connection pool: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = sqlx::migrate!("./migrations").run(&connection_pool).await {
        tracing::error!("❌ Failed to run database migrations: {}", e);
        std::process::exit(1);
    }

    let fpl_client = match FplClient::new(&config.fpl) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Failed to build FPL client: {}", e);
            std::process::exit(1);
        }
    };
    let sync_service = Arc::new(SyncService::new(connection_pool.clone(), fpl_client));

    // Kept alive for the lifetime of the server
    let _scheduler = if config.sync.enabled {
        Some(start_scheduler(sync_service.clone(), &config.sync.schedule).await)
    } else {
        tracing::info!("Scheduled FPL sync is disabled");
        None
    };

    if config.sync.run_on_startup {
        let sync_service = sync_service.clone();
        tokio::spawn(async move {
            tracing::info!("Running FPL sync on startup");
            sync_service.run_cycle().await;
        });
    }

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {}", address);

    run(
        listener,
        connection_pool,
        jwt_settings,
        comment_settings,
        config.sync,
        sync_service,
    )?.await
}

async fn start_scheduler(sync_service: Arc<SyncService>, schedule: &str) -> SchedulerService {
    let scheduler = match SchedulerService::new(sync_service).await {
        Ok(scheduler) => scheduler,
        Err(e) => {
            tracing::error!("❌ Failed to create scheduler service: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = scheduler.schedule_sync(schedule).await {
        tracing::error!("❌ Invalid sync schedule '{}': {}", schedule, e);
        std::process::exit(1);
    }

    if let Err(e) = scheduler.start().await {
        tracing::error!("❌ Failed to start scheduler: {}", e);
        std::process::exit(1);
    }

    scheduler
}
