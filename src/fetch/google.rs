//! reqwest-backed fetcher for the Google results page.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::error::DorkError;
use crate::fetch::PageFetcher;
use crate::utils::HttpClient;

/// Fetches results pages over HTTP
#[derive(Debug, Clone)]
pub struct GoogleFetcher {
    client: Arc<HttpClient>,
}

impl GoogleFetcher {
    pub fn new() -> Result<Self, DorkError> {
        Ok(Self {
            client: Arc::new(HttpClient::new()?),
        })
    }

    /// Create a fetcher with a custom user agent and request timeout
    pub fn with_settings(user_agent: &str, timeout: Duration) -> Result<Self, DorkError> {
        Ok(Self {
            client: Arc::new(HttpClient::with_settings(user_agent, timeout)?),
        })
    }
}

#[async_trait]
impl PageFetcher for GoogleFetcher {
    async fn fetch(&self, url: &str) -> Result<String, DorkError> {
        tracing::debug!(url, "Fetching search results");

        let response = self
            .client
            .client()
            .get(url)
            .header("Accept", "text/html")
            .send()
            .await?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), "Search engine responded");

        if !status.is_success() {
            return Err(DorkError::Fetch(format!(
                "search engine returned status: {}",
                status
            )));
        }

        response
            .text()
            .await
            .map_err(|e| DorkError::Fetch(format!("failed to read response: {}", e)))
    }
}
