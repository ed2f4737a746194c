//! Data models for chart feeds.
//!
//! This module contains the normalized album record, the fixed
//! category/country catalog, and feed metadata.

pub mod album;
pub mod catalog;
pub mod common;

// Re-exports for convenience
pub use album::{fold_case, Album, DEFAULT_CURRENCY, DEFAULT_PRICE};
pub use catalog::{Category, Country, Query, CATEGORIES, COUNTRIES};
pub use common::{artwork_url, FeedPage, NO_IMAGE};
