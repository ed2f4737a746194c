//! Error types for the chart client.

use thiserror::Error;

/// Main error type for all chart operations.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A feed entry is missing a field the normalized album requires.
    #[error("Malformed feed entry #{index}: missing {field}")]
    MalformedEntry {
        /// Position of the entry inside the feed.
        index: usize,
        /// JSON path of the missing field.
        field: &'static str,
    },

    /// The response is not shaped like a feed at all.
    #[error("Malformed feed: {0}")]
    MalformedFeed(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// Status code returned by the server.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// Country slug is not one of the known countries.
    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    /// Category slug is not one of the known categories.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Invalid configuration value.
    #[error("Config error: {0}")]
    Config(String),

    /// HTTP request failed.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Config file is not valid TOML.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;
