// src/lib.rs
//! Deterministic, rule-based topic categorization for feed posts.
//!
//! A fixed Rule Table (keywords, phrases, patterns, weight per category) is
//! scored against a text; scores are normalized into confidence percentages
//! and exposed through a few decision helpers and an optional HTTP surface.
//!
//! ```
//! use post_categorizer::{categorize_content, get_primary_category, Category};
//!
//! let scores = categorize_content("team scored a goal and won the match");
//! assert_eq!(scores[0].category, Category::Sports);
//! assert_eq!(scores[0].confidence, 100);
//! assert_eq!(get_primary_category("asdfgh qwerty", 30), Category::General);
//! ```

pub mod api;
pub mod category;
pub mod classifier;
pub mod config;
pub mod debug;
pub mod error;
pub mod feed;
pub mod metrics;
pub mod rules;
pub mod scorer;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::category::{map_tab_to_category, Category};
pub use crate::classifier::{
    belongs_to_category, categorize_batch, categorize_content, get_post_categories,
    get_primary_category, CategoryScore,
};
pub use crate::feed::{filter_posts_by_category, filter_posts_by_tab, Post, PostContent};
