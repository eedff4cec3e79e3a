use std::collections::HashMap;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgExecutor;
use sqlx::Row;
use uuid::Uuid;

use crate::models::matches::{Match, MatchFields, MatchView};

const MATCH_COLUMNS: &str = "id, home_team_id, away_team_id, match_date, status, \
    home_score, away_score, fpl_fixture_id, gameweek";

const MATCH_VIEW_SELECT: &str = r#"
    SELECT
        m.id,
        m.match_date,
        m.status,
        m.home_score,
        m.away_score,
        m.gameweek,
        ht.id AS home_team_id,
        ht.name AS home_team_name,
        ht.logo_url AS home_team_logo_url,
        at.id AS away_team_id,
        at.name AS away_team_name,
        at.logo_url AS away_team_logo_url
    FROM matches m
    INNER JOIN teams ht ON ht.id = m.home_team_id
    INNER JOIN teams at ON at.id = m.away_team_id
"#;

/// External fixture id -> local match id.
pub async fn get_fixture_ids<'e, E: PgExecutor<'e>>(executor: E) -> Result<HashMap<i32, Uuid>, sqlx::Error> {
    let rows = sqlx::query("SELECT id, fpl_fixture_id FROM matches WHERE fpl_fixture_id IS NOT NULL")
        .fetch_all(executor)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| (row.get::<i32, _>("fpl_fixture_id"), row.get::<Uuid, _>("id")))
        .collect())
}

pub async fn insert_match<'e, E: PgExecutor<'e>>(executor: E, fields: &MatchFields) -> Result<Match, sqlx::Error> {
    sqlx::query_as::<_, Match>(&format!(
        r#"
        INSERT INTO matches (
            id, home_team_id, away_team_id, match_date, status,
            home_score, away_score, fpl_fixture_id, gameweek
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {}
        "#,
        MATCH_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(fields.home_team_id)
    .bind(fields.away_team_id)
    .bind(fields.match_date)
    .bind(fields.status.as_str())
    .bind(fields.home_score)
    .bind(fields.away_score)
    .bind(fields.fpl_fixture_id)
    .bind(fields.gameweek)
    .fetch_one(executor)
    .await
}

pub async fn update_match<'e, E: PgExecutor<'e>>(
    executor: E,
    match_id: Uuid,
    fields: &MatchFields,
) -> Result<Match, sqlx::Error> {
    sqlx::query_as::<_, Match>(&format!(
        r#"
        UPDATE matches SET
            fpl_fixture_id = $2,
            home_team_id = $3,
            away_team_id = $4,
            match_date = $5,
            status = $6,
            home_score = $7,
            away_score = $8,
            gameweek = $9
        WHERE id = $1
        RETURNING {}
        "#,
        MATCH_COLUMNS
    ))
    .bind(match_id)
    .bind(fields.fpl_fixture_id)
    .bind(fields.home_team_id)
    .bind(fields.away_team_id)
    .bind(fields.match_date)
    .bind(fields.status.as_str())
    .bind(fields.home_score)
    .bind(fields.away_score)
    .bind(fields.gameweek)
    .fetch_one(executor)
    .await
}

pub async fn get_gameweeks<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<i32>, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        "SELECT DISTINCT gameweek FROM matches WHERE gameweek IS NOT NULL ORDER BY gameweek ASC",
    )
    .fetch_all(executor)
    .await
}

/// Lowest gameweek that still has a match kicking off after `now`.
pub async fn get_next_gameweek<'e, E: PgExecutor<'e>>(
    executor: E,
    now: DateTime<Utc>,
) -> Result<Option<i32>, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        r#"
        SELECT gameweek FROM matches
        WHERE gameweek IS NOT NULL AND match_date > $1
        ORDER BY gameweek ASC, match_date ASC
        LIMIT 1
        "#,
    )
    .bind(now)
    .fetch_optional(executor)
    .await
}

pub async fn get_match_views<'e, E: PgExecutor<'e>>(
    executor: E,
    gameweek: Option<i32>,
) -> Result<Vec<MatchView>, sqlx::Error> {
    let query = format!(
        "{} WHERE ($1::INTEGER IS NULL OR m.gameweek = $1) ORDER BY m.match_date ASC NULLS LAST, m.id",
        MATCH_VIEW_SELECT
    );
    sqlx::query_as::<_, MatchView>(&query)
        .bind(gameweek)
        .fetch_all(executor)
        .await
}

pub async fn get_match_view<'e, E: PgExecutor<'e>>(
    executor: E,
    match_id: Uuid,
) -> Result<Option<MatchView>, sqlx::Error> {
    let query = format!("{} WHERE m.id = $1", MATCH_VIEW_SELECT);
    sqlx::query_as::<_, MatchView>(&query)
        .bind(match_id)
        .fetch_optional(executor)
        .await
}

pub async fn match_exists<'e, E: PgExecutor<'e>>(executor: E, match_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM matches WHERE id = $1)")
        .bind(match_id)
        .fetch_one(executor)
        .await
}
