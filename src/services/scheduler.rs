use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use uuid::Uuid;
use std::error::Error;

use crate::services::sync_service::SyncService;

/// Periodically triggers FPL sync cycles.
pub struct SchedulerService {
    scheduler: Arc<Mutex<JobScheduler>>,
    sync_service: Arc<SyncService>,
    sync_job: Arc<Mutex<Option<Uuid>>>,
}

impl SchedulerService {
    pub async fn new(sync_service: Arc<SyncService>) -> Result<Self, Box<dyn Error>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            scheduler: Arc::new(Mutex::new(scheduler)),
            sync_service,
            sync_job: Arc::new(Mutex::new(None)),
        })
    }

    pub async fn start(&self) -> Result<(), Box<dyn Error>> {
        let scheduler = self.scheduler.lock().await;
        scheduler.start().await?;

        tracing::info!("✅ Scheduler service started");
        Ok(())
    }

    pub async fn stop(&self) -> Result<(), Box<dyn Error>> {
        let mut scheduler = self.scheduler.lock().await;
        scheduler.shutdown().await?;

        tracing::info!("🛑 Scheduler service stopped");
        Ok(())
    }

    /// Register the recurring sync job. Scheduling again replaces the previous job.
    /// An invalid expression is rejected before the current job is touched.
    pub async fn schedule_sync(&self, cron_expr: &str) -> Result<Uuid, JobSchedulerError> {
        let sync_service = self.sync_service.clone();
        let sync_job = Job::new_async(cron_expr, move |_uuid, _l| {
            let sync_service = sync_service.clone();

            Box::pin(async move {
                tracing::info!("⏰ Running scheduled FPL sync");
                let report = sync_service.run_cycle().await;
                tracing::info!("Teams update: {}", report.team_update);
                tracing::info!("Fixtures update: {}", report.fixture_update);
            })
        })?;

        self.unschedule_sync().await?;

        let job_id = sync_job.guid();
        {
            let scheduler = self.scheduler.lock().await;
            scheduler.add(sync_job).await?;
        }
        *self.sync_job.lock().await = Some(job_id);

        tracing::info!("✅ Scheduled FPL sync ({})", cron_expr);
        Ok(job_id)
    }

    pub async fn unschedule_sync(&self) -> Result<(), JobSchedulerError> {
        let mut sync_job = self.sync_job.lock().await;

        if let Some(job_id) = sync_job.take() {
            let scheduler = self.scheduler.lock().await;
            scheduler.remove(&job_id).await?;
            tracing::info!("Removed scheduled FPL sync {}", job_id);
        }

        Ok(())
    }

    pub async fn scheduled_job(&self) -> Option<Uuid> {
        *self.sync_job.lock().await
    }
}
