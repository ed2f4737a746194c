//! JSON to model converters.
//!
//! This module turns raw chart feed JSON into [`Album`] records. The feed
//! labels every value as `{"label": ...}` and is loose about shapes: price
//! and artwork may be missing and `link` is either one object or a list.

use std::slice;

use serde_json::Value;

use crate::error::{ChartError, Result};
use crate::models::{Album, FeedPage, DEFAULT_CURRENCY, DEFAULT_PRICE};

/// Get the `label` of a labelled field, if present and a string.
fn label<'a>(json: &'a Value, key: &str) -> Option<&'a str> {
    json.get(key)
        .and_then(|v| v.get("label"))
        .and_then(|v| v.as_str())
}

/// Get a plain or labelled string value.
fn text(json: &Value, key: &str) -> Option<String> {
    let value = json.get(key)?;
    value
        .as_str()
        .or_else(|| value.get("label").and_then(|l| l.as_str()))
        .map(|s| s.to_string())
}

/// Get an identifier that may be serialized as a string or a number.
fn get_id(json: &Value) -> Option<String> {
    let id = json.get("id")?.get("attributes")?.get("im:id")?;
    if let Some(s) = id.as_str() {
        Some(s.to_string())
    } else {
        id.as_u64().map(|n| n.to_string())
    }
}

/// Required labelled field; missing means the entry is malformed.
fn required(json: &Value, index: usize, key: &str, field: &'static str) -> Result<String> {
    label(json, key)
        .map(|s| s.to_string())
        .ok_or(ChartError::MalformedEntry { index, field })
}

/// Last (largest) artwork variant, or empty when there is none.
fn extract_image(json: &Value) -> String {
    json.get("im:image")
        .and_then(|v| v.as_array())
        .and_then(|variants| variants.last())
        .and_then(|v| v.get("label"))
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

/// Price label and currency, with defaults for unpriced entries.
fn extract_price(json: &Value) -> (String, String) {
    let price = json.get("im:price");

    let label = price
        .and_then(|p| p.get("label"))
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_PRICE);

    let currency = price
        .and_then(|p| p.get("attributes"))
        .and_then(|a| a.get("currency"))
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_CURRENCY);

    (label.to_string(), currency.to_string())
}

/// Store URL from `link`, which is a single object or a list of them.
fn extract_url(json: &Value) -> Option<String> {
    let link = json.get("link")?;
    let link = match link.as_array() {
        Some(links) => links.first()?,
        None => link,
    };

    link.get("attributes")
        .and_then(|a| a.get("href"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

/// Parse one feed entry. `index` is its position, used in errors.
pub fn parse_entry(index: usize, json: &Value) -> Result<Album> {
    let name = required(json, index, "im:name", "im:name.label")?;
    let title = required(json, index, "title", "title.label")?;
    let artist = required(json, index, "im:artist", "im:artist.label")?;
    let id = get_id(json).ok_or(ChartError::MalformedEntry {
        index,
        field: "id.attributes.im:id",
    })?;
    let url = extract_url(json).ok_or(ChartError::MalformedEntry {
        index,
        field: "link.attributes.href",
    })?;
    let (price, currency) = extract_price(json);

    Ok(Album {
        id,
        name,
        title,
        artist,
        image: extract_image(json),
        price,
        currency,
        url,
        release_date: label(json, "im:releaseDate").unwrap_or("").to_string(),
    })
}

/// Normalize feed entries, one album per entry, in feed order.
///
/// Fails on the first malformed entry; no partial list is returned.
pub fn transform_entries(entries: &[Value]) -> Result<Vec<Album>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_entry(index, entry))
        .collect()
}

/// Parse a whole feed response.
///
/// A feed without `entry` is an empty chart; a single object in place of
/// the list is a one-entry chart.
pub fn transform_feed(json: &Value) -> Result<FeedPage> {
    let feed = json
        .get("feed")
        .ok_or_else(|| ChartError::MalformedFeed("missing feed object".to_string()))?;

    let albums = match feed.get("entry") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => transform_entries(entries)?,
        Some(entry @ Value::Object(_)) => transform_entries(slice::from_ref(entry))?,
        Some(_) => {
            return Err(ChartError::MalformedFeed(
                "entry is neither a list nor an object".to_string(),
            ))
        }
    };

    Ok(FeedPage {
        id: text(feed, "id").unwrap_or_default(),
        title: text(feed, "title").unwrap_or_default(),
        country: text(feed, "country"),
        albums,
    })
}
