//! Typed views of the two FPL payloads the sync routines consume.

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::models::matches::MatchFields;
use crate::models::team::{crest_url, TeamFields};
use crate::sync::error::SyncError;
use crate::sync::normalize::{derive_match_status, normalize_form, parse_fpl_datetime};

/// One entry of `bootstrap-static/`'s `teams` array.
#[derive(Debug, Deserialize, Clone)]
pub struct FplTeam {
    pub id: i32,
    pub name: String,
    pub short_name: String,
    pub code: i32,
    #[serde(default)]
    pub played: Option<i32>,
    #[serde(default)]
    pub win: Option<i32>,
    #[serde(default)]
    pub draw: Option<i32>,
    #[serde(default)]
    pub loss: Option<i32>,
    #[serde(default)]
    pub points: Option<i32>,
    #[serde(default)]
    pub position: Option<i32>,
    #[serde(default)]
    pub form: Value,
}

impl FplTeam {
    pub fn into_fields(self) -> TeamFields {
        TeamFields {
            fpl_id: self.id,
            logo_url: crest_url(self.code),
            form: normalize_form(&self.form),
            name: self.name,
            short_name: self.short_name,
            fpl_team_code: self.code,
            played: self.played.unwrap_or(0),
            win: self.win.unwrap_or(0),
            draw: self.draw.unwrap_or(0),
            loss: self.loss.unwrap_or(0),
            points: self.points.unwrap_or(0),
            position: self.position.unwrap_or(0),
        }
    }
}

/// One entry of the `fixtures/` array.
#[derive(Debug, Deserialize, Clone)]
pub struct FplFixture {
    pub id: i32,
    pub team_h: Option<i32>,
    pub team_a: Option<i32>,
    pub kickoff_time: Option<String>,
    pub team_h_score: Option<i32>,
    pub team_a_score: Option<i32>,
    pub event: Option<i32>,
    pub started: Option<bool>,
    pub finished_provisional: Option<bool>,
    pub finished: Option<bool>,
}

impl FplFixture {
    pub fn has_kickoff_time(&self) -> bool {
        self.kickoff_time
            .as_deref()
            .map(|k| !k.is_empty())
            .unwrap_or(false)
    }

    pub fn into_fields(self, home_team_id: Uuid, away_team_id: Uuid) -> MatchFields {
        let status = derive_match_status(
            self.started.unwrap_or(false),
            self.finished_provisional.unwrap_or(false),
            self.finished.unwrap_or(false),
            self.has_kickoff_time(),
        );

        MatchFields {
            fpl_fixture_id: self.id,
            home_team_id,
            away_team_id,
            match_date: parse_fpl_datetime(self.kickoff_time.as_deref()),
            status,
            home_score: self.team_h_score,
            away_score: self.team_a_score,
            gameweek: self.event,
        }
    }
}

/// Pull the `teams` array out of a `bootstrap-static/` body. A missing or null array is an empty league.
pub fn team_entries(body: Value) -> Result<Vec<Value>, SyncError> {
    let Value::Object(mut root) = body else {
        return Err(SyncError::unexpected_shape("bootstrap-static body is not a JSON object"));
    };
    match root.remove("teams") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(teams)) => Ok(teams),
        Some(_) => Err(SyncError::unexpected_shape("`teams` is not a JSON array")),
    }
}

pub fn fixture_entries(body: Value) -> Result<Vec<Value>, SyncError> {
    match body {
        Value::Array(fixtures) => Ok(fixtures),
        _ => Err(SyncError::unexpected_shape("fixtures body is not a JSON array")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::matches::MatchStatus;
    use serde_json::json;

    #[test]
    fn team_statistics_default_to_zero() {
        let team: FplTeam = serde_json::from_value(json!({
            "id": 1, "name": "Arsenal", "short_name": "ARS", "code": 3,
            "played": null, "form": null
        }))
        .expect("valid team payload");
        let fields = team.into_fields();
        assert_eq!(fields.played, 0);
        assert_eq!(fields.points, 0);
        assert_eq!(fields.form, None);
        assert_eq!(fields.logo_url, crest_url(3));
    }

    #[test]
    fn team_without_name_is_rejected() {
        let result = serde_json::from_value::<FplTeam>(json!({
            "id": 1, "short_name": "ARS", "code": 3
        }));
        assert!(result.is_err());
    }

    #[test]
    fn fixture_fields_carry_derived_status() {
        let fixture: FplFixture = serde_json::from_value(json!({
            "id": 10, "team_h": 1, "team_a": 2,
            "kickoff_time": "2024-08-16T19:00:00Z",
            "team_h_score": 2, "team_a_score": 0, "event": 1,
            "started": true, "finished_provisional": true, "finished": false
        }))
        .expect("valid fixture payload");
        let fields = fixture.into_fields(Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(fields.status, MatchStatus::Finished);
        assert_eq!(fields.gameweek, Some(1));
        assert!(fields.match_date.is_some());
    }

    #[test]
    fn null_flags_and_missing_kickoff_mean_scheduled() {
        let fixture: FplFixture = serde_json::from_value(json!({
            "id": 11, "team_h": 1, "team_a": 2,
            "kickoff_time": null, "started": null
        }))
        .expect("valid fixture payload");
        let fields = fixture.into_fields(Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(fields.status, MatchStatus::Scheduled);
        assert_eq!(fields.match_date, None);
    }

    #[test]
    fn unparseable_kickoff_still_counts_as_present() {
        let fixture: FplFixture = serde_json::from_value(json!({
            "id": 12, "team_h": 1, "team_a": 2, "kickoff_time": "tbc"
        }))
        .expect("valid fixture payload");
        let fields = fixture.into_fields(Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(fields.status, MatchStatus::Upcoming);
        assert_eq!(fields.match_date, None);
    }

    #[test]
    fn whitespace_kickoff_is_still_a_kickoff() {
        let fixture: FplFixture = serde_json::from_value(json!({
            "id": 13, "team_h": 1, "team_a": 2, "kickoff_time": " "
        }))
        .expect("valid fixture payload");
        assert!(fixture.has_kickoff_time());
        let fields = fixture.into_fields(Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(fields.status, MatchStatus::Upcoming);
        assert_eq!(fields.match_date, None);
    }

    #[test]
    fn empty_kickoff_means_scheduled() {
        let fixture: FplFixture = serde_json::from_value(json!({
            "id": 14, "team_h": 1, "team_a": 2, "kickoff_time": ""
        }))
        .expect("valid fixture payload");
        assert_eq!(fixture.into_fields(Uuid::new_v4(), Uuid::new_v4()).status, MatchStatus::Scheduled);
    }

    #[test]
    fn missing_teams_array_is_empty() {
        assert!(team_entries(json!({"events": []})).expect("object body").is_empty());
        assert!(team_entries(json!({"teams": "nope"})).is_err());
        assert!(team_entries(json!([])).is_err());
    }
}
