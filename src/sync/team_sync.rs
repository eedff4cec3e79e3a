use std::fmt;
use serde_json::Value;
use sqlx::{PgConnection, PgPool};

use crate::db::teams;
use crate::services::fpl_client::FplClient;
use crate::sync::error::SyncError;
use crate::sync::matching::{match_team, TeamMatch};
use crate::sync::upstream::{team_entries, FplTeam};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TeamSyncCounts {
    pub updated: usize,
    pub created: usize,
}

impl fmt::Display for TeamSyncCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Teams and standings updated: {} updated, {} new.",
            self.updated, self.created
        )
    }
}

/// Fetch teams and standings and reconcile them into the `teams` table.
///
/// Never fails: the outcome, good or bad, comes back as a summary line.
#[tracing::instrument(name = "Sync FPL teams", skip(pool, client))]
pub async fn sync_teams(pool: &PgPool, client: &FplClient) -> String {
    match run_team_sync(pool, client).await {
        Ok(counts) => {
            tracing::info!("✅ {}", counts);
            counts.to_string()
        }
        Err(e) if e.is_transport() => {
            tracing::error!("❌ Failed to fetch FPL team data: {}", e);
            format!("Error fetching FPL team data: {}", e)
        }
        Err(e) => {
            tracing::error!("❌ Failed to process FPL team data, batch rolled back: {}", e);
            format!("Error processing FPL team data: {}", e)
        }
    }
}

pub async fn run_team_sync(pool: &PgPool, client: &FplClient) -> Result<TeamSyncCounts, SyncError> {
    // No transaction is opened until the upstream body is in hand
    let body = client.fetch_bootstrap_static().await?;
    let entries = team_entries(body)?;

    let mut tx = pool.begin().await?;
    match apply_teams(&mut *tx, entries).await {
        Ok(counts) => {
            tx.commit().await?;
            Ok(counts)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!("Rollback after failed team sync also failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}

async fn apply_teams(conn: &mut PgConnection, entries: Vec<Value>) -> Result<TeamSyncCounts, SyncError> {
    let mut known = teams::get_all_teams(&mut *conn).await?;
    let mut counts = TeamSyncCounts::default();

    for entry in entries {
        let fields = serde_json::from_value::<FplTeam>(entry)?.into_fields();

        let existing_id = match match_team(&known, fields.fpl_id, &fields.name) {
            TeamMatch::FoundById(team) => Some(team.id),
            TeamMatch::FoundByName(team) => {
                tracing::debug!(
                    "Team '{}' matched by name, adopting FPL id {}",
                    team.name, fields.fpl_id
                );
                Some(team.id)
            }
            TeamMatch::NotFound => None,
        };

        match existing_id {
            Some(team_id) => {
                let updated = teams::update_team(&mut *conn, team_id, &fields).await?;
                if let Some(slot) = known.iter_mut().find(|t| t.id == team_id) {
                    *slot = updated;
                }
                counts.updated += 1;
            }
            None => {
                let created = teams::insert_team(&mut *conn, &fields).await?;
                tracing::info!("Created team '{}' (FPL id {})", created.name, fields.fpl_id);
                known.push(created);
                counts.created += 1;
            }
        }
    }

    Ok(counts)
}
