use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const DEFAULT_LEAGUE: &str = "Premier League";

const TEAM_CREST_URL_TEMPLATE: &str =
    "https://resources.premierleague.com/premierleague/badges/rb/t{team_code}.svg";

#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub short_name: Option<String>,
    pub logo_url: Option<String>,
    pub league: Option<String>,
    pub fpl_id: Option<i32>,
    pub fpl_team_code: Option<i32>,
    pub played: i32,
    pub win: i32,
    pub draw: i32,
    pub loss: i32,
    pub points: i32,
    pub position: i32,
    pub form: Option<String>,
}

/// Every field the upstream source is authoritative for. Applied wholesale on each sync.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamFields {
    pub fpl_id: i32,
    pub name: String,
    pub short_name: String,
    pub fpl_team_code: i32,
    pub logo_url: String,
    pub played: i32,
    pub win: i32,
    pub draw: i32,
    pub loss: i32,
    pub points: i32,
    pub position: i32,
    pub form: Option<String>,
}

pub fn crest_url(team_code: i32) -> String {
    TEAM_CREST_URL_TEMPLATE.replace("{team_code}", &team_code.to_string())
}

/// Stored form is either comma-joined tokens ("W,W,D") or a run of single letters ("WWDLW").
fn split_form(form: &str) -> Vec<String> {
    if form.contains(',') {
        form.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        form.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_string())
            .collect()
    }
}

/// One row of the league table as served to clients.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StandingsEntry {
    pub id: Uuid,
    pub position: i32,
    pub name: String,
    pub short_name: Option<String>,
    pub logo_url: Option<String>,
    pub played: i32,
    pub win: i32,
    pub draw: i32,
    pub loss: i32,
    pub points: i32,
    pub form: Vec<String>,
}

impl From<Team> for StandingsEntry {
    fn from(team: Team) -> Self {
        let form = team.form.as_deref().map(split_form).unwrap_or_default();

        Self {
            id: team.id,
            position: team.position,
            name: team.name,
            short_name: team.short_name,
            logo_url: team.logo_url,
            played: team.played,
            win: team.win,
            draw: team.draw,
            loss: team.loss,
            points: team.points,
            form,
        }
    }
}
