use crate::types::{FeedPayload, Result, WallMetadata};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Transport seam for the feed and metadata endpoints.
///
/// The wall only needs "fetch -> payload or error"; anything beyond the
/// transport's own failure signal (timeouts, status handling) lives behind
/// this trait. Tests substitute a scripted implementation.
#[async_trait]
pub trait FeedSource: Send {
    /// Fetch the article feed from the given endpoint.
    async fn fetch_feed(&mut self, url: &str) -> Result<FeedPayload>;

    /// Fetch deployment metadata. Callers treat any error as "keep defaults".
    async fn fetch_metadata(&mut self, url: &str) -> Result<WallMetadata>;
}

/// JSON-over-HTTP source backed by reqwest.
pub struct HttpFeedSource {
    client: Client,
}

impl HttpFeedSource {
    pub fn new(user_agent: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_feed(&mut self, url: &str) -> Result<FeedPayload> {
        let url = Url::parse(url)?;
        debug!("Fetching feed: {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        let payload: FeedPayload = serde_json::from_str(&body)?;
        info!("Fetched feed with {} articles", payload.articles.len());
        Ok(payload)
    }

    async fn fetch_metadata(&mut self, url: &str) -> Result<WallMetadata> {
        let url = Url::parse(url)?;
        debug!("Fetching metadata: {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
