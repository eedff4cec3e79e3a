use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

pub const DEFAULT_SYNC_SCHEDULE: &str = "0 0 */3 * * *";

#[derive(Deserialize, Debug, Clone)]
pub struct SyncSettings {
    /// Shared secret for `/update-data-cron`. Without it the endpoint rejects everything.
    #[serde(default)]
    pub cron_api_key: Option<SecretString>,
    #[serde(default = "default_schedule")]
    pub schedule: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub run_on_startup: bool,
}

fn default_schedule() -> String {
    DEFAULT_SYNC_SCHEDULE.to_string()
}

impl SyncSettings {
    pub fn key_matches(&self, candidate: &str) -> bool {
        match &self.cron_api_key {
            Some(key) => {
                let expected = key.expose_secret();
                !expected.is_empty() && expected == candidate
            }
            None => false,
        }
    }
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            cron_api_key: None,
            schedule: default_schedule(),
            enabled: false,
            run_on_startup: false,
        }
    }
}
