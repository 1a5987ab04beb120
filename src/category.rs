//! # Categories
//! Closed topic enumeration plus the fixed UI tab vocabulary.
//!
//! `General` is the fallback label: it has no rule and never appears in a
//! non-degenerate classification result.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::CategoryParseError;

/// One label from the fixed topic enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    News,
    Sports,
    Entertainment,
    Technology,
    Politics,
    Business,
    Lifestyle,
    General,
}

impl Category {
    /// All categories, ruled ones first (Rule Table order), `General` last.
    pub const ALL: [Category; 8] = [
        Category::News,
        Category::Sports,
        Category::Entertainment,
        Category::Technology,
        Category::Politics,
        Category::Business,
        Category::Lifestyle,
        Category::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::News => "news",
            Category::Sports => "sports",
            Category::Entertainment => "entertainment",
            Category::Technology => "technology",
            Category::Politics => "politics",
            Category::Business => "business",
            Category::Lifestyle => "lifestyle",
            Category::General => "general",
        }
    }

    /// UI tab label for this category. `General` has no tab.
    pub fn tab_label(self) -> Option<&'static str> {
        TAB_LABELS
            .iter()
            .find(|(_, c)| *c == self)
            .map(|(label, _)| *label)
    }

    pub fn is_general(self) -> bool {
        self == Category::General
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

/// Fixed tab vocabulary supplied by the feed UI.
pub const TAB_LABELS: [(&str, Category); 7] = [
    ("News", Category::News),
    ("Sports", Category::Sports),
    ("Entertainment", Category::Entertainment),
    ("Technology", Category::Technology),
    ("Politics", Category::Politics),
    ("Business", Category::Business),
    ("Lifestyle", Category::Lifestyle),
];

/// Static lookup from a UI tab label to its category.
///
/// Exact match on the label; anything else (including "General" or a
/// lowercase variant) yields `None`, which callers treat as "no filter".
pub fn map_tab_to_category(tab_label: &str) -> Option<Category> {
    TAB_LABELS
        .iter()
        .find(|(label, _)| *label == tab_label)
        .map(|(_, c)| *c)
}
