use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error as ThisError;

use crate::config::fpl::FplSettings;

#[derive(Debug, ThisError)]
pub enum FplClientError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },

    #[error("{url} returned a body that is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Read-only client for the two Fantasy Premier League endpoints we consume.
///
/// No retries and no timeout beyond reqwest's defaults; a failed call simply fails the cycle.
#[derive(Debug, Clone)]
pub struct FplClient {
    base_url: String,
    client: Client,
}

impl FplClient {
    pub fn new(settings: &FplSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .build()?;

        Ok(Self {
            base_url: settings.normalized_base_url(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn bootstrap_static_url(&self) -> String {
        format!("{}bootstrap-static/", self.base_url)
    }

    pub fn fixtures_url(&self) -> String {
        format!("{}fixtures/", self.base_url)
    }

    /// League metadata and standings. The `teams` array is what the team sync consumes.
    pub async fn fetch_bootstrap_static(&self) -> Result<Value, FplClientError> {
        self.get_json(self.bootstrap_static_url()).await
    }

    pub async fn fetch_fixtures(&self) -> Result<Value, FplClientError> {
        self.get_json(self.fixtures_url()).await
    }

    async fn get_json(&self, url: String) -> Result<Value, FplClientError> {
        tracing::debug!("Fetching {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(source) => return Err(FplClientError::Request { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("FPL API returned {} for {}", status, url);
            return Err(FplClientError::Status { url, status });
        }

        match response.json::<Value>().await {
            Ok(body) => Ok(body),
            Err(source) => Err(FplClientError::Decode { url, source }),
        }
    }
}
