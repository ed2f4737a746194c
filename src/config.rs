//! Client configuration.
//!
//! Every key is optional; a missing file section falls back to the public
//! iTunes endpoint with a 100 entry limit.
//!
//! ```toml
//! base_url = "https://itunes.apple.com"
//! limit = 100
//! timeout_secs = 10
//! country = "de"
//! category = "topsongs"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ChartError, Result};
use crate::models::{Category, Country, Query};

/// Default feed host.
pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com";

/// Default number of chart entries per request.
pub const DEFAULT_LIMIT: u32 = 100;

/// Largest limit the feed accepts.
pub const MAX_LIMIT: u32 = 200;

const DEFAULT_USER_AGENT: &str = concat!("tunechart/", env!("CARGO_PKG_VERSION"));

/// Settings for [`FeedApi`](crate::api::FeedApi) and the initial query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Scheme and host the feed path is appended to.
    pub base_url: String,

    /// Entries per chart.
    pub limit: u32,

    pub user_agent: String,

    /// Request timeout. Unset means no timeout.
    pub timeout_secs: Option<u64>,

    /// Initial country slug.
    pub country: Option<String>,

    /// Initial category slug.
    pub category: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            limit: DEFAULT_LIMIT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
            country: None,
            category: None,
        }
    }
}

impl ChartConfig {
    /// Read and validate a TOML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML config text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges and slugs.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 || self.limit > MAX_LIMIT {
            return Err(ChartError::Config(format!(
                "limit must be between 1 and {}, got {}",
                MAX_LIMIT, self.limit
            )));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ChartError::Config(format!(
                "base_url must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(ChartError::Config("timeout_secs must be positive".to_string()));
        }
        self.initial_query()?;
        Ok(())
    }

    /// Request timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// The query to start browsing with.
    pub fn initial_query(&self) -> Result<Query> {
        let mut query = Query::default();
        if let Some(slug) = &self.category {
            query = query.with_category(slug.parse::<Category>()?);
        }
        if let Some(slug) = &self.country {
            query = query.with_country(slug.parse::<Country>()?);
        }
        Ok(query)
    }
}
