//! API client for the chart feeds.
//!
//! - [`FeedApi`]: fetches and normalizes one chart per request

pub mod feed;

pub use feed::FeedApi;
