//! Reconciliation of Fantasy Premier League data into local teams and matches.
//!
//! Teams must be synced before fixtures in any cycle: fixtures find their
//! sides through the FPL ids the team sync writes.

pub mod error;
pub mod fixture_sync;
pub mod matching;
pub mod normalize;
pub mod team_sync;
pub mod upstream;

pub use error::SyncError;
pub use fixture_sync::{sync_fixtures, FixtureSyncCounts};
pub use team_sync::{sync_teams, TeamSyncCounts};
