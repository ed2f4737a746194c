//! Chart feed client.
//!
//! This module provides a client for the public iTunes RSS feeds
//! (itunes.apple.com). No authentication is required.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::ChartConfig;
use crate::converters;
use crate::error::{ChartError, Result};
use crate::models::{Album, FeedPage, Query};

/// Chart feed client.
///
/// One GET per call: no retry, no caching.
///
/// # Example
///
/// ```rust,no_run
/// use tunechart::{FeedApi, Query};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = FeedApi::new()?;
///     let albums = api.get_albums(&Query::default()).await?;
///     println!("{} albums", albums.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FeedApi {
    client: Client,
    base_url: String,
    limit: u32,
}

impl FeedApi {
    /// Create a client for the public endpoint with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(&ChartConfig::default())
    }

    /// Create a client from configuration.
    pub fn with_config(config: &ChartConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            limit: config.limit,
        })
    }

    /// Feed URL for a query.
    pub fn feed_url(&self, query: &Query) -> String {
        format!(
            "{}/{}/rss/{}/limit={}/json",
            self.base_url, query.country.slug, query.category.slug, self.limit
        )
    }

    /// Make a GET request and decode the JSON body.
    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("Feed request failed: HTTP {} from {}", status, url);
            return Err(ChartError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch a chart with its feed metadata.
    pub async fn get_feed(&self, query: &Query) -> Result<FeedPage> {
        let url = self.feed_url(query);
        let json = self.get_json(&url).await?;

        let page = converters::transform_feed(&json).inspect_err(|e| {
            error!("Could not normalize feed {}: {}", url, e);
        })?;
        debug!("Fetched {} entries from {}", page.albums.len(), url);

        Ok(page)
    }

    /// Fetch a chart's normalized entries.
    pub async fn get_albums(&self, query: &Query) -> Result<Vec<Album>> {
        Ok(self.get_feed(query).await?.albums)
    }
}
