use std::collections::HashMap;
use sqlx::postgres::PgExecutor;
use sqlx::Row;
use uuid::Uuid;

use crate::models::team::{Team, TeamFields, DEFAULT_LEAGUE};

const TEAM_COLUMNS: &str = "id, name, short_name, logo_url, league, fpl_id, fpl_team_code, \
    played, win, draw, loss, points, position, form";

pub async fn get_all_teams<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(&format!("SELECT {} FROM teams ORDER BY name", TEAM_COLUMNS))
        .fetch_all(executor)
        .await
}

/// League table order. Teams that were never ranked (position 0) go last.
pub async fn get_standings<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(&format!(
        "SELECT {} FROM teams ORDER BY position = 0, position ASC, name ASC",
        TEAM_COLUMNS
    ))
    .fetch_all(executor)
    .await
}

/// External FPL id -> local id, for every team that has been synced at least once.
pub async fn get_fpl_team_ids<'e, E: PgExecutor<'e>>(executor: E) -> Result<HashMap<i32, Uuid>, sqlx::Error> {
    let rows = sqlx::query("SELECT id, fpl_id FROM teams WHERE fpl_id IS NOT NULL")
        .fetch_all(executor)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| (row.get::<i32, _>("fpl_id"), row.get::<Uuid, _>("id")))
        .collect())
}

pub async fn insert_team<'e, E: PgExecutor<'e>>(executor: E, fields: &TeamFields) -> Result<Team, sqlx::Error> {
    sqlx::query_as::<_, Team>(&format!(
        r#"
        INSERT INTO teams (
            id, name, short_name, logo_url, league, fpl_id, fpl_team_code,
            played, win, draw, loss, points, position, form
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        RETURNING {}
        "#,
        TEAM_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(&fields.name)
    .bind(&fields.short_name)
    .bind(&fields.logo_url)
    .bind(DEFAULT_LEAGUE)
    .bind(fields.fpl_id)
    .bind(fields.fpl_team_code)
    .bind(fields.played)
    .bind(fields.win)
    .bind(fields.draw)
    .bind(fields.loss)
    .bind(fields.points)
    .bind(fields.position)
    .bind(&fields.form)
    .fetch_one(executor)
    .await
}

/// Overwrites every upstream-owned column. `league` is local and left alone.
pub async fn update_team<'e, E: PgExecutor<'e>>(
    executor: E,
    team_id: Uuid,
    fields: &TeamFields,
) -> Result<Team, sqlx::Error> {
    sqlx::query_as::<_, Team>(&format!(
        r#"
        UPDATE teams SET
            fpl_id = $2,
            name = $3,
            short_name = $4,
            fpl_team_code = $5,
            logo_url = $6,
            played = $7,
            win = $8,
            draw = $9,
            loss = $10,
            points = $11,
            position = $12,
            form = $13
        WHERE id = $1
        RETURNING {}
        "#,
        TEAM_COLUMNS
    ))
    .bind(team_id)
    .bind(fields.fpl_id)
    .bind(&fields.name)
    .bind(&fields.short_name)
    .bind(fields.fpl_team_code)
    .bind(&fields.logo_url)
    .bind(fields.played)
    .bind(fields.win)
    .bind(fields.draw)
    .bind(fields.loss)
    .bind(fields.points)
    .bind(fields.position)
    .bind(&fields.form)
    .fetch_one(executor)
    .await
}
