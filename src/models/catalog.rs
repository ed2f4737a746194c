//! Chart categories and store countries.
//!
//! Both lists are fixed; they are never fetched. A [`Query`] pairs one of
//! each and is the only input a feed request needs.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ChartError;

/// A chart kind, e.g. top albums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    /// Display name.
    pub name: &'static str,
    /// URL segment of the feed.
    pub slug: &'static str,
    /// Symbolic icon name for front ends.
    pub icon: &'static str,
}

/// A store front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Country {
    /// Display name.
    pub name: &'static str,
    /// Two-letter store code used in the feed URL.
    pub slug: &'static str,
}

/// All known chart categories. The first one is the default.
pub const CATEGORIES: [Category; 2] = [
    Category {
        name: "Albums",
        slug: "topalbums",
        icon: "album",
    },
    Category {
        name: "Songs",
        slug: "topsongs",
        icon: "music_note",
    },
];

/// All known countries. The first one is the default.
pub const COUNTRIES: [Country; 4] = [
    Country {
        name: "USA",
        slug: "us",
    },
    Country {
        name: "Germany",
        slug: "de",
    },
    Country {
        name: "France",
        slug: "fr",
    },
    Country {
        name: "India",
        slug: "in",
    },
];

impl Category {
    /// Look up a category by slug (case-insensitive).
    pub fn from_slug(slug: &str) -> Option<Self> {
        CATEGORIES
            .iter()
            .copied()
            .find(|c| c.slug.eq_ignore_ascii_case(slug))
    }
}

impl Default for Category {
    fn default() -> Self {
        CATEGORIES[0]
    }
}

impl FromStr for Category {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| ChartError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Country {
    /// Look up a country by slug (case-insensitive).
    pub fn from_slug(slug: &str) -> Option<Self> {
        COUNTRIES
            .iter()
            .copied()
            .find(|c| c.slug.eq_ignore_ascii_case(slug))
    }
}

impl Default for Country {
    fn default() -> Self {
        COUNTRIES[0]
    }
}

impl FromStr for Country {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| ChartError::UnknownCountry(s.to_string()))
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// What to fetch: one category in one country.
///
/// Immutable; the `with_*` methods return a new query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Query {
    pub category: Category,
    pub country: Country,
}

impl Query {
    pub fn new(category: Category, country: Country) -> Self {
        Self { category, country }
    }

    pub fn with_category(self, category: Category) -> Self {
        Self { category, ..self }
    }

    pub fn with_country(self, country: Country) -> Self {
        Self { country, ..self }
    }
}
