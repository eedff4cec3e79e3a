pub mod fpl_client;
pub mod scheduler;
pub mod sync_service;

pub use fpl_client::FplClient;
pub use scheduler::SchedulerService;
pub use sync_service::{SyncReport, SyncService};
