//! Async driver tying a [`FeedApi`] to a [`ChartBrowser`].
//!
//! Each query change fetches on the caller's task. The browser lock is
//! released while the request is in flight, so several changes can overlap;
//! the generation check in [`ChartBrowser::complete`] keeps only the latest.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::error;

use crate::api::FeedApi;
use crate::browser::{ChartBrowser, FetchTicket, View};
use crate::models::{Album, Category, Country, Query};

/// Owned copy of what the browser currently shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub heading: String,
    pub query: Query,
    pub search: String,
    pub generation: u64,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Entries matching the search.
    pub albums: Vec<Album>,
}

/// Shared browsing session. Clones share the same state.
#[derive(Debug, Clone)]
pub struct ChartSession {
    api: FeedApi,
    browser: Arc<RwLock<ChartBrowser>>,
}

impl ChartSession {
    pub fn new(api: FeedApi, query: Query) -> Self {
        Self {
            api,
            browser: Arc::new(RwLock::new(ChartBrowser::new(query))),
        }
    }

    /// Fetch the current query. Returns whether the result was applied.
    pub async fn load(&self) -> bool {
        let ticket = self.browser.write().await.refresh();
        self.run(ticket).await
    }

    /// Switch category and fetch if it changed.
    pub async fn select_category(&self, category: Category) -> bool {
        let ticket = self.browser.write().await.select_category(category);
        self.run_opt(ticket).await
    }

    /// Switch country and fetch if it changed.
    pub async fn select_country(&self, country: Country) -> bool {
        let ticket = self.browser.write().await.select_country(country);
        self.run_opt(ticket).await
    }

    /// Change the search string; filters in place, no request.
    pub async fn set_search<S: Into<String>>(&self, search: S) {
        self.browser.write().await.set_search(search);
    }

    pub async fn snapshot(&self) -> Snapshot {
        let browser = self.browser.read().await;
        let (loading, error, albums) = match browser.view() {
            View::Loading => (true, None, Vec::new()),
            View::Failed(message) => (false, Some(message.to_string()), Vec::new()),
            View::Albums(albums) => (false, None, albums.into_iter().cloned().collect()),
            View::Idle | View::NoMatches(_) => (false, None, Vec::new()),
        };

        Snapshot {
            heading: browser.heading(),
            query: *browser.query(),
            search: browser.search().to_string(),
            generation: browser.generation(),
            loading,
            error,
            albums,
        }
    }

    async fn run_opt(&self, ticket: Option<FetchTicket>) -> bool {
        match ticket {
            Some(ticket) => self.run(ticket).await,
            None => false,
        }
    }

    async fn run(&self, ticket: FetchTicket) -> bool {
        let result = self.api.get_albums(ticket.query()).await;
        if let Err(e) = &result {
            error!("Fetch #{} failed: {}", ticket.generation(), e);
        }
        self.browser.write().await.complete(ticket, result)
    }
}
