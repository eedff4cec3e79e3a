use std::fmt;
use serde_json::Value;
use sqlx::{PgConnection, PgPool};

use crate::db::{matches, teams};
use crate::services::fpl_client::FplClient;
use crate::sync::error::SyncError;
use crate::sync::matching::resolve_sides;
use crate::sync::upstream::{fixture_entries, FplFixture};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixtureSyncCounts {
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
}

impl fmt::Display for FixtureSyncCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fixtures updated: {} new, {} updated, {} skipped.",
            self.created, self.updated, self.skipped
        )
    }
}

/// Fetch all fixtures and reconcile them into the `matches` table.
///
/// Relies on teams having been synced first: fixtures whose sides are not known
/// locally by FPL id are skipped for this cycle.
#[tracing::instrument(name = "Sync FPL fixtures", skip(pool, client))]
pub async fn sync_fixtures(pool: &PgPool, client: &FplClient) -> String {
    match run_fixture_sync(pool, client).await {
        Ok(counts) => {
            tracing::info!("✅ {}", counts);
            counts.to_string()
        }
        Err(e) if e.is_transport() => {
            tracing::error!("❌ Failed to fetch FPL fixture data: {}", e);
            format!("Error fetching FPL fixture data: {}", e)
        }
        Err(e) => {
            tracing::error!("❌ Failed to process FPL fixture data, batch rolled back: {}", e);
            format!("An unexpected error occurred during fixture processing: {}", e)
        }
    }
}

pub async fn run_fixture_sync(pool: &PgPool, client: &FplClient) -> Result<FixtureSyncCounts, SyncError> {
    let body = client.fetch_fixtures().await?;
    let entries = fixture_entries(body)?;

    let mut tx = pool.begin().await?;
    match apply_fixtures(&mut *tx, entries).await {
        Ok(counts) => {
            tx.commit().await?;
            Ok(counts)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!("Rollback after failed fixture sync also failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}

async fn apply_fixtures(conn: &mut PgConnection, entries: Vec<Value>) -> Result<FixtureSyncCounts, SyncError> {
    let teams_by_fpl_id = teams::get_fpl_team_ids(&mut *conn).await?;
    let mut known_fixtures = matches::get_fixture_ids(&mut *conn).await?;
    let mut counts = FixtureSyncCounts::default();

    for entry in entries {
        let fixture = serde_json::from_value::<FplFixture>(entry)?;

        let Some((home_team_id, away_team_id)) =
            resolve_sides(&teams_by_fpl_id, fixture.team_h, fixture.team_a)
        else {
            tracing::debug!(
                "Skipping fixture {}: teams {:?} vs {:?} not resolvable locally",
                fixture.id, fixture.team_h, fixture.team_a
            );
            counts.skipped += 1;
            continue;
        };

        let fields = fixture.into_fields(home_team_id, away_team_id);

        match known_fixtures.get(&fields.fpl_fixture_id).copied() {
            Some(match_id) => {
                matches::update_match(&mut *conn, match_id, &fields).await?;
                counts.updated += 1;
            }
            None => {
                let created = matches::insert_match(&mut *conn, &fields).await?;
                known_fixtures.insert(fields.fpl_fixture_id, created.id);
                counts.created += 1;
            }
        }
    }

    Ok(counts)
}
