//! Common types shared across all models.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::album::Album;

/// Placeholder artwork shown for entries without an image.
pub const NO_IMAGE: &str = "no-image.webp";

/// A fetched chart: feed metadata plus the normalized entries.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FeedPage {
    /// Feed identifier (the request URL, as the store reports it).
    pub id: String,

    /// Feed title, e.g. "iTunes Store: Top Albums".
    pub title: String,

    /// Country code reported by the feed, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Entries in chart order.
    pub albums: Vec<Album>,
}

/// Matches the `/<height>x<width>` segment of store artwork URLs.
static DIMENSIONS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/(\d+)x(\d+)").unwrap());

/// Rewrite the `/<height>x<width>` segment of an artwork URL.
///
/// Only the first such segment is replaced. URLs without one are returned
/// unchanged and an empty URL maps to [`NO_IMAGE`].
pub fn artwork_url(url: &str, height: u32, width: u32) -> String {
    if url.is_empty() {
        return NO_IMAGE.to_string();
    }

    DIMENSIONS
        .replace(url, format!("/{}x{}", height, width).as_str())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_url_replaces_first_dimensions() {
        let url = "https://is1.mzstatic.com/image/thumb/Music/v4/ab/170x170bb.png";
        assert_eq!(
            artwork_url(url, 200, 150),
            "https://is1.mzstatic.com/image/thumb/Music/v4/ab/200x150bb.png"
        );
    }

    #[test]
    fn test_artwork_url_only_first_segment() {
        let url = "https://cdn.example/55x55/sub/100x100.jpg";
        assert_eq!(
            artwork_url(url, 10, 20),
            "https://cdn.example/10x20/sub/100x100.jpg"
        );
    }

    #[test]
    fn test_artwork_url_without_dimensions() {
        let url = "https://cdn.example/cover/x100.jpg";
        assert_eq!(artwork_url(url, 10, 20), url);
    }

    #[test]
    fn test_artwork_url_empty() {
        assert_eq!(artwork_url("", 200, 150), NO_IMAGE);
    }
}
