use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::services::fpl_client::FplClient;
use crate::sync::{sync_fixtures, sync_teams};

/// The two summary lines of one sync cycle, as returned by the trigger endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncReport {
    pub team_update: String,
    pub fixture_update: String,
}

/// Runs sync cycles against one database and one upstream.
///
/// Overlapping cycles are not guarded against; callers trigger one at a time.
#[derive(Debug, Clone)]
pub struct SyncService {
    pool: PgPool,
    client: FplClient,
}

impl SyncService {
    pub fn new(pool: PgPool, client: FplClient) -> Self {
        Self { pool, client }
    }

    pub async fn sync_teams(&self) -> String {
        sync_teams(&self.pool, &self.client).await
    }

    pub async fn sync_fixtures(&self) -> String {
        sync_fixtures(&self.pool, &self.client).await
    }

    /// Teams first, then fixtures. The fixture pass runs even if the team pass reported an error.
    pub async fn run_cycle(&self) -> SyncReport {
        tracing::info!("🔄 Starting FPL sync cycle against {}", self.client.base_url());
        let team_update = self.sync_teams().await;
        let fixture_update = self.sync_fixtures().await;
        tracing::info!("Sync cycle finished. Teams: {} Fixtures: {}", team_update, fixture_update);

        SyncReport {
            team_update,
            fixture_update,
        }
    }
}
