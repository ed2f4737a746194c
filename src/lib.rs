//! # tunechart
//!
//! A client for the iTunes "top charts" feeds: fetch a chart per country
//! and category, normalize its entries, and browse them with a search
//! filter.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tunechart::{ChartSession, Country, FeedApi, Query};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = ChartSession::new(FeedApi::new()?, Query::default());
//!     session.load().await;
//!
//!     // Switching country fetches again; searching does not.
//!     session.select_country(Country::from_slug("de").unwrap()).await;
//!     session.set_search("love").await;
//!
//!     for album in session.snapshot().await.albums {
//!         println!("{} ({})", album.title, album.price);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Layers
//!
//! - [`converters`] - raw feed JSON to [`Album`]
//! - [`FeedApi`] - one GET per chart
//! - [`ChartBrowser`] - query, search and latest result, stale-response safe
//! - [`ChartSession`] - async owner of the two above

pub mod api;
pub mod browser;
pub mod config;
pub mod converters;
pub mod error;
pub mod models;
mod session;

#[cfg(test)]
mod test_support;

pub use api::FeedApi;
pub use browser::{filter_albums, ChartBrowser, FetchTicket, View};
pub use config::ChartConfig;
pub use error::ChartError;
pub use models::{Album, Category, Country, FeedPage, Query, CATEGORIES, COUNTRIES};
pub use session::{ChartSession, Snapshot};
