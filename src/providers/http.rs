use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::core::config::AppConfig;
use crate::core::source::RateSource;

/// Fetches rates from a primary endpoint, falling back once to a backup.
pub struct HttpRateFetcher {
    client: reqwest::Client,
    primary_url: String,
    backup_url: String,
}

impl HttpRateFetcher {
    pub fn new(primary_url: &str, backup_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("fxrates/1.0")
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(HttpRateFetcher {
            client,
            primary_url: primary_url.to_string(),
            backup_url: backup_url.to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            &config.providers.primary.url,
            &config.providers.backup.url,
            config.timeout(),
        )
    }

    async fn fetch_from(&self, url: &str) -> Result<String> {
        debug!("Requesting currency rates from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {} URL: {}", response.status(), url));
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to get response text from {url}"))
    }
}

#[async_trait]
impl RateSource for HttpRateFetcher {
    #[instrument(name = "RateFetch", skip(self))]
    async fn fetch(&self) -> Option<String> {
        match self.fetch_from(&self.primary_url).await {
            Ok(body) => return Some(body),
            Err(e) => warn!("Primary rate provider failed: {e}. Trying backup"),
        }

        self.fetch_from(&self.backup_url)
            .await
            .inspect_err(|e| warn!("Backup rate provider failed: {e}"))
            .ok()
    }
}
