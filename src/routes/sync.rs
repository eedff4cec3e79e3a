use actix_web::{get, post, web, HttpResponse};
use std::sync::Arc;

use crate::config::sync::SyncSettings;
use crate::handlers::sync_handler::{trigger_admin_sync, trigger_cron_sync, CronTriggerQuery};
use crate::middleware::auth::Claims;
use crate::services::SyncService;

#[get("/update-data-cron")]
async fn update_data_cron(
    query: web::Query<CronTriggerQuery>,
    sync_settings: web::Data<SyncSettings>,
    sync_service: web::Data<Arc<SyncService>>,
) -> HttpResponse {
    trigger_cron_sync(query, sync_settings, sync_service).await
}

#[post("/sync")]
async fn admin_sync(
    claims: web::ReqData<Claims>,
    sync_service: web::Data<Arc<SyncService>>,
) -> HttpResponse {
    trigger_admin_sync(claims, sync_service).await
}
