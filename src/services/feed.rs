//! Observation feed sources

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::{Config, FeedLocation};
use crate::error::FeedError;

/// Source of the raw CSV text
#[async_trait]
pub trait StormFeed: Send + Sync {
    async fn fetch_text(&self) -> Result<String, FeedError>;

    /// Human-readable location, for diagnostics
    fn describe(&self) -> String;
}

/// Feed served over HTTP(S)
pub struct HttpStormFeed {
    client: reqwest::Client,
    url: Url,
}

impl HttpStormFeed {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(url, client))
    }

    pub fn with_client(url: Url, client: reqwest::Client) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl StormFeed for HttpStormFeed {
    async fn fetch_text(&self) -> Result<String, FeedError> {
        debug!(url = %self.url, "Fetching storm feed");
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Feed read from a local CSV file
pub struct FileStormFeed {
    path: PathBuf,
}

impl FileStormFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl StormFeed for FileStormFeed {
    async fn fetch_text(&self) -> Result<String, FeedError> {
        debug!(path = %self.path.display(), "Reading storm feed");
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FeedError::Io {
                path: self.path.display().to_string(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Feed for the configured location
pub fn feed_from_config(config: &Config) -> Result<Box<dyn StormFeed>, FeedError> {
    match &config.feed {
        FeedLocation::Http(url) => Ok(Box::new(HttpStormFeed::new(
            url.clone(),
            config.request_timeout,
        )?)),
        FeedLocation::File(path) => Ok(Box::new(FileStormFeed::new(path.clone()))),
    }
}
