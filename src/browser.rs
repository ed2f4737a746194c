//! Query state for browsing a chart.
//!
//! [`ChartBrowser`] owns the selected [`Query`], the search string and the
//! last fetch result. Changing the query starts a new fetch generation;
//! changing the search only re-filters what is already in hand.
//!
//! Fetching itself happens outside: the browser hands out a
//! [`FetchTicket`] and later accepts the result for that ticket. Results
//! for any ticket but the latest are dropped, so a slow response for an
//! old query can never replace a newer one.

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{fold_case, Album, Category, Country, Query};

/// Handle for one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    query: Query,
}

impl FetchTicket {
    /// Monotonic fetch number.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Query to fetch.
    pub fn query(&self) -> &Query {
        &self.query
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Album>),
    Failed(String),
}

/// What a front end should show right now.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    /// Nothing requested yet.
    Idle,
    /// Waiting for the current fetch.
    Loading,
    /// The current fetch failed with this message.
    Failed(&'a str),
    /// Nothing matches the search (or the chart is empty).
    NoMatches(&'a str),
    /// Entries to show, in chart order.
    Albums(Vec<&'a Album>),
}

/// Keep albums whose title or artist contains `search`, ignoring case.
///
/// The search is trimmed first. An empty search keeps everything.
pub fn filter_albums<'a>(albums: &'a [Album], search: &str) -> Vec<&'a Album> {
    let needle = fold_case(search.trim());
    if needle.is_empty() {
        return albums.iter().collect();
    }
    albums.iter().filter(|a| a.matches(&needle)).collect()
}

/// Selected query, search string and latest result.
#[derive(Debug, Clone, Default)]
pub struct ChartBrowser {
    query: Query,
    search: String,
    generation: u64,
    state: FetchState,
}

impl ChartBrowser {
    pub fn new(query: Query) -> Self {
        Self {
            query,
            ..Default::default()
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Generation of the most recent fetch, 0 before the first.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Page heading, e.g. "Top Albums".
    pub fn heading(&self) -> String {
        format!("Top {}", self.query.category.name)
    }

    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    /// Switch category. Returns a ticket only if the query changed.
    pub fn select_category(&mut self, category: Category) -> Option<FetchTicket> {
        self.set_query(self.query.with_category(category))
    }

    /// Switch country. Returns a ticket only if the query changed.
    pub fn select_country(&mut self, country: Country) -> Option<FetchTicket> {
        self.set_query(self.query.with_country(country))
    }

    /// Replace the query. Returns a ticket only if it differs.
    pub fn set_query(&mut self, query: Query) -> Option<FetchTicket> {
        if query == self.query && self.state != FetchState::Idle {
            return None;
        }
        self.query = query;
        Some(self.refresh())
    }

    /// Start a fetch for the current query, superseding any in flight.
    pub fn refresh(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = FetchState::Loading;
        debug!(
            "Fetch #{} for {}/{}",
            self.generation, self.query.country.slug, self.query.category.slug
        );
        FetchTicket {
            generation: self.generation,
            query: self.query,
        }
    }

    /// Apply a fetch result. Returns false, leaving state untouched, if
    /// the ticket has been superseded.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Vec<Album>>) -> bool {
        if ticket.generation != self.generation {
            warn!(
                "Discarding stale response #{} for {}/{} (current #{})",
                ticket.generation,
                ticket.query.country.slug,
                ticket.query.category.slug,
                self.generation
            );
            return false;
        }

        self.state = match result {
            Ok(albums) => FetchState::Loaded(albums),
            Err(e) => FetchState::Failed(e.to_string()),
        };
        true
    }

    /// Change the search string. Never triggers a fetch.
    pub fn set_search<S: Into<String>>(&mut self, search: S) {
        self.search = search.into();
    }

    /// All entries of the current result, unfiltered.
    pub fn albums(&self) -> Option<&[Album]> {
        match &self.state {
            FetchState::Loaded(albums) => Some(albums.as_slice()),
            _ => None,
        }
    }

    /// Error message of the current result.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Entries matching the search, empty unless loaded.
    pub fn visible(&self) -> Vec<&Album> {
        self.albums()
            .map(|albums| filter_albums(albums, &self.search))
            .unwrap_or_default()
    }

    pub fn view(&self) -> View<'_> {
        match &self.state {
            FetchState::Idle => View::Idle,
            FetchState::Loading => View::Loading,
            FetchState::Failed(message) => View::Failed(message.as_str()),
            FetchState::Loaded(albums) => {
                let visible = filter_albums(albums, &self.search);
                if visible.is_empty() {
                    View::NoMatches(self.search.as_str())
                } else {
                    View::Albums(visible)
                }
            }
        }
    }
}
