//! # Feed filtering
//! Category and tab filters over caller-owned post collections.
//!
//! Anything exposing its text body through [`PostContent`] can be filtered;
//! input order is always preserved.

use serde::{Deserialize, Serialize};

use crate::category::{map_tab_to_category, Category};
use crate::classifier::belongs_to_category;

pub const DEFAULT_FILTER_MIN_CONFIDENCE: u8 = 20;

/// Text body of a post as handed over by the storage/transport layer.
pub trait PostContent {
    fn content(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: String,
    pub content: String,
}

impl Post {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

impl PostContent for Post {
    fn content(&self) -> &str {
        &self.content
    }
}

impl PostContent for String {
    fn content(&self) -> &str {
        self
    }
}

impl PostContent for &str {
    fn content(&self) -> &str {
        self
    }
}

/// Posts belonging to `category` at `min_confidence`.
/// `General` means no filtering: every post is returned.
pub fn filter_posts_by_category<P: PostContent>(
    posts: &[P],
    category: Category,
    min_confidence: u8,
) -> Vec<&P> {
    if category.is_general() {
        return posts.iter().collect();
    }
    posts
        .iter()
        .filter(|p| belongs_to_category(p.content(), category, min_confidence))
        .collect()
}

/// Tab-driven variant. Unrecognized tab labels apply no filter.
pub fn filter_posts_by_tab<'a, P: PostContent>(
    posts: &'a [P],
    tab_label: &str,
    min_confidence: u8,
) -> Vec<&'a P> {
    match map_tab_to_category(tab_label) {
        Some(category) => filter_posts_by_category(posts, category, min_confidence),
        None => posts.iter().collect(),
    }
}
