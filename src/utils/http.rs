// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::FetchConfig;

/// Trait for fetching a page body as text.
///
/// Seam for the pipeline driver: production uses `HttpFetcher`, tests
/// substitute a stub.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the full response body for the given URL.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetcher backed by a configured reqwest client.
///
/// The client presents the configured identity as its User-Agent; the
/// council site degrades requests without a recognizable browser identity.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher from the fetch configuration.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let text = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(text)
    }
}
