use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;

use crate::config::sync::SyncSettings;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::services::SyncService;

#[derive(Debug, Deserialize)]
pub struct CronTriggerQuery {
    pub key: Option<String>,
}

/// Runs one sync cycle for an external cron caller holding the shared key.
#[tracing::instrument(name = "Cron sync trigger", skip(query, sync_settings, sync_service))]
pub async fn trigger_cron_sync(
    query: web::Query<CronTriggerQuery>,
    sync_settings: web::Data<SyncSettings>,
    sync_service: web::Data<Arc<SyncService>>,
) -> HttpResponse {
    let authorized = query
        .key
        .as_deref()
        .map(|key| sync_settings.key_matches(key))
        .unwrap_or(false);

    if !authorized {
        tracing::warn!("Rejected cron sync trigger with missing or wrong key");
        return HttpResponse::Unauthorized().json(ApiResponse::<()>::error("Unauthorized"));
    }

    let report = sync_service.run_cycle().await;
    HttpResponse::Ok().json(report)
}

#[tracing::instrument(
    name = "Admin sync trigger",
    skip(claims, sync_service),
    fields(admin = %claims.username)
)]
pub async fn trigger_admin_sync(
    claims: web::ReqData<Claims>,
    sync_service: web::Data<Arc<SyncService>>,
) -> HttpResponse {
    let report = sync_service.run_cycle().await;
    HttpResponse::Ok().json(report)
}
