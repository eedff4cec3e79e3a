//! Reconciliation policy: how upstream records find their local counterparts.

use std::collections::HashMap;
use uuid::Uuid;

use crate::models::team::Team;

/// Result of looking up an upstream team among the local ones.
#[derive(Debug, PartialEq)]
pub enum TeamMatch<'a> {
    FoundById(&'a Team),
    FoundByName(&'a Team),
    NotFound,
}

/// External id first, then case-insensitive name.
pub fn match_team<'a>(teams: &'a [Team], fpl_id: i32, name: &str) -> TeamMatch<'a> {
    if let Some(team) = teams.iter().find(|t| t.fpl_id == Some(fpl_id)) {
        return TeamMatch::FoundById(team);
    }

    let wanted = name.to_lowercase();
    match teams.iter().find(|t| t.name.to_lowercase() == wanted) {
        Some(team) => TeamMatch::FoundByName(team),
        None => TeamMatch::NotFound,
    }
}

/// Map both sides of a fixture onto local team ids.
///
/// `None` when a side is absent, unknown locally, or both sides land on the same team.
pub fn resolve_sides(
    teams_by_fpl_id: &HashMap<i32, Uuid>,
    team_h: Option<i32>,
    team_a: Option<i32>,
) -> Option<(Uuid, Uuid)> {
    let home = *teams_by_fpl_id.get(&team_h?)?;
    let away = *teams_by_fpl_id.get(&team_a?)?;
    if home == away {
        return None;
    }
    Some((home, away))
}
