use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::{db_result, require_record};
use crate::db::{comments, matches};
use crate::models::matches::{MatchDetailResponse, MatchListQuery, MatchListResponse};
use crate::ok_or_return;

/// Picks the gameweek to show when the caller did not ask for one.
///
/// `gameweeks` is ascending. `next_gameweek` is the lowest gameweek with a kickoff still ahead.
pub fn select_gameweek(
    requested: Option<i32>,
    gameweeks: &[i32],
    next_gameweek: Option<i32>,
) -> Option<i32> {
    requested
        .or(next_gameweek)
        .or_else(|| gameweeks.last().copied())
}

#[tracing::instrument(name = "List matches", skip(pool, query), fields(gameweek = ?query.gameweek))]
pub async fn list_matches(
    query: web::Query<MatchListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let gameweeks = ok_or_return!(db_result(matches::get_gameweeks(pool.get_ref()).await));

    let next_gameweek = if query.gameweek.is_none() && !gameweeks.is_empty() {
        ok_or_return!(db_result(matches::get_next_gameweek(pool.get_ref(), Utc::now()).await))
    } else {
        None
    };

    let selected_gameweek = select_gameweek(query.gameweek, &gameweeks, next_gameweek);
    let match_views = ok_or_return!(db_result(
        matches::get_match_views(pool.get_ref(), selected_gameweek).await
    ));

    Ok(HttpResponse::Ok().json(MatchListResponse {
        gameweeks,
        selected_gameweek,
        matches: match_views,
    }))
}

#[tracing::instrument(name = "Get match detail", skip(pool))]
pub async fn get_match_detail(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let match_view = ok_or_return!(require_record(
        matches::get_match_view(pool.get_ref(), match_id).await,
        "Match not found",
    ));
    let thread = ok_or_return!(db_result(comments::get_match_comments(pool.get_ref(), match_id).await));

    Ok(HttpResponse::Ok().json(MatchDetailResponse {
        match_view,
        comments: thread,
    }))
}
