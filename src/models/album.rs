//! Normalized chart entry.

use serde::Serialize;

use super::common::artwork_url;

/// Price label used when the feed entry carries no price.
pub const DEFAULT_PRICE: &str = "0";

/// Currency used when the feed entry carries no price.
pub const DEFAULT_CURRENCY: &str = "N/A";

/// Lowercase one character at a time.
///
/// Unlike [`str::to_lowercase`] this ignores context (final sigma), so the
/// folding of a substring is always a substring of the folded whole.
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// One entry of a top chart, album or song alike.
///
/// Every field is a string, exactly as the feed labels it. `id` is only
/// unique within a single fetched feed.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Store identifier.
    pub id: String,

    /// Bare item name.
    pub name: String,

    /// Display title, usually "name - artist".
    pub title: String,

    /// Artist name.
    pub artist: String,

    /// Highest resolution artwork URL, empty when the feed has none.
    pub image: String,

    /// Formatted price label, e.g. "$9.99".
    pub price: String,

    /// ISO currency code, or "N/A".
    pub currency: String,

    /// Store page URL.
    pub url: String,

    /// Release date as labelled by the feed.
    pub release_date: String,
}

impl Album {
    /// Whether the album's title or artist contains `needle`.
    ///
    /// `needle` must already be folded with [`fold_case`].
    pub fn matches(&self, needle: &str) -> bool {
        fold_case(&self.title).contains(needle) || fold_case(&self.artist).contains(needle)
    }

    /// Whether the price fell back to the default.
    pub fn is_unpriced(&self) -> bool {
        self.price == DEFAULT_PRICE && self.currency == DEFAULT_CURRENCY
    }

    /// Artwork URL resized to the given dimensions.
    pub fn artwork(&self, height: u32, width: u32) -> String {
        artwork_url(&self.image, height, width)
    }
}
