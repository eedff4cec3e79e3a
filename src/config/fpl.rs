use serde::Deserialize;

pub const DEFAULT_FPL_BASE_URL: &str = "https://fantasy.premierleague.com/api/";

/// Where the Fantasy Premier League API lives.
#[derive(Deserialize, Debug, Clone)]
pub struct FplSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_FPL_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    concat!("teamtalk-backend/", env!("CARGO_PKG_VERSION")).to_string()
}

impl FplSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: default_user_agent(),
        }
    }

    /// Endpoint URLs are built by plain concatenation, so the base always ends with a slash.
    pub fn normalized_base_url(&self) -> String {
        if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        }
    }
}

impl Default for FplSettings {
    fn default() -> Self {
        Self::new(DEFAULT_FPL_BASE_URL)
    }
}
