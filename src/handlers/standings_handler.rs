use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;

use crate::db::helpers::db_result;
use crate::db::teams;
use crate::models::team::StandingsEntry;
use crate::ok_or_return;

#[tracing::instrument(name = "Get league standings", skip(pool))]
pub async fn get_standings(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let table = ok_or_return!(db_result(teams::get_standings(pool.get_ref()).await));
    let entries: Vec<StandingsEntry> = table.into_iter().map(StandingsEntry::from).collect();

    Ok(HttpResponse::Ok().json(entries))
}
