use std::fmt;
use std::str::FromStr;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::comment::CommentWithAuthor;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchStatus {
    Scheduled,
    Upcoming,
    Live,
    Finished,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "Scheduled",
            MatchStatus::Upcoming => "Upcoming",
            MatchStatus::Live => "Live",
            MatchStatus::Finished => "Finished",
        }
    }

}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Scheduled" => Ok(MatchStatus::Scheduled),
            "Upcoming" => Ok(MatchStatus::Upcoming),
            "Live" => Ok(MatchStatus::Live),
            "Finished" => Ok(MatchStatus::Finished),
            other => Err(format!("unknown match status '{}'", other)),
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq)]
pub struct Match {
    pub id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub match_date: Option<DateTime<Utc>>,
    pub status: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub fpl_fixture_id: Option<i32>,
    pub gameweek: Option<i32>,
}

/// Values written for one upstream fixture. Both team ids are already resolved locally.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchFields {
    pub fpl_fixture_id: i32,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub match_date: Option<DateTime<Utc>>,
    pub status: MatchStatus,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub gameweek: Option<i32>,
}

/// A match joined with both team names, as listed on the home page.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchView {
    pub id: Uuid,
    pub match_date: Option<DateTime<Utc>>,
    pub status: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub gameweek: Option<i32>,
    pub home_team_id: Uuid,
    pub home_team_name: String,
    pub home_team_logo_url: Option<String>,
    pub away_team_id: Uuid,
    pub away_team_name: String,
    pub away_team_logo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MatchListQuery {
    pub gameweek: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchListResponse {
    pub gameweeks: Vec<i32>,
    pub selected_gameweek: Option<i32>,
    pub matches: Vec<MatchView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchDetailResponse {
    #[serde(rename = "match")]
    pub match_view: MatchView,
    pub comments: Vec<CommentWithAuthor>,
}
