// src/classifier.rs
//! Classifier: runs the scorer over the Rule Table, normalizes scores into
//! confidence percentages, and answers category-decision questions.
//!
//! Two degenerate results exist and are kept distinct:
//! - empty / whitespace-only text → `[general, score 0, confidence 0]`
//! - non-empty text with no matches → `[general, score 0, confidence 100]`

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::category::Category;
use crate::rules::rule_table;
use crate::scorer::{self, ScoreBreakdown};

pub const DEFAULT_PRIMARY_MIN_CONFIDENCE: u8 = 30;
pub const DEFAULT_BELONGS_MIN_CONFIDENCE: u8 = 25;
pub const DEFAULT_POST_CATEGORIES_MIN_CONFIDENCE: u8 = 20;

pub const ENV_DEV_LOG: &str = "CATEGORIZER_DEV_LOG";

/// Result entry for one category. Created per call, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: f64,
    pub confidence: u8,
}

impl CategoryScore {
    fn general(confidence: u8) -> Self {
        Self {
            category: Category::General,
            score: 0.0,
            confidence,
        }
    }
}

/// Score `text` against every ruled category.
///
/// Returns matched categories sorted by score (descending, stable on table
/// order), each with its rounded share of the total score.
pub fn categorize_content(text: &str) -> Vec<CategoryScore> {
    if text.trim().is_empty() {
        let out = vec![CategoryScore::general(0)];
        dev_log_categorization("empty", text, &out);
        return out;
    }

    let mut scored: Vec<(Category, f64)> = rule_table()
        .iter()
        .map(|rule| (rule.category, scorer::score(text, rule)))
        .filter(|(_, s)| *s > 0.0)
        .collect();

    if scored.is_empty() {
        let out = vec![CategoryScore::general(100)];
        dev_log_categorization("no_match", text, &out);
        return out;
    }

    let total: f64 = scored.iter().map(|(_, s)| s).sum();
    // sort_by is stable: equal scores keep Rule Table order
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let out: Vec<CategoryScore> = scored
        .into_iter()
        .map(|(category, score)| CategoryScore {
            category,
            score,
            confidence: confidence_pct(score, total),
        })
        .collect();

    dev_log_categorization("matched", text, &out);
    out
}

fn confidence_pct(score: f64, total: f64) -> u8 {
    (score / total * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Top category if its confidence reaches `min_confidence`, else `General`.
pub fn get_primary_category(text: &str, min_confidence: u8) -> Category {
    match categorize_content(text).first() {
        Some(top) if top.confidence >= min_confidence => top.category,
        _ => Category::General,
    }
}

/// True iff `category` is in the result with at least `min_confidence`.
pub fn belongs_to_category(text: &str, category: Category, min_confidence: u8) -> bool {
    categorize_content(text)
        .iter()
        .any(|s| s.category == category && s.confidence >= min_confidence)
}

/// Every category reaching `min_confidence`, in descending score order.
pub fn get_post_categories(text: &str, min_confidence: u8) -> Vec<Category> {
    categorize_content(text)
        .into_iter()
        .filter(|s| s.confidence >= min_confidence)
        .map(|s| s.category)
        .collect()
}

/// Index-aligned `categorize_content` over many texts.
pub fn categorize_batch<S: AsRef<str>>(texts: &[S]) -> Vec<Vec<CategoryScore>> {
    texts
        .iter()
        .map(|t| categorize_content(t.as_ref()))
        .collect()
}

/// Per-category evidence for every ruled category (zero scores included),
/// in Rule Table order.
pub fn explain_content(text: &str) -> Vec<ScoreBreakdown> {
    rule_table()
        .iter()
        .map(|rule| scorer::explain(text, rule))
        .collect()
}

/* ----------------------------
Dev diagnostics
---------------------------- */

// CATEGORIZER_DEV_LOG=1 AND dev env (debug build or SHUTTLE_ENV in {local,development,dev})
pub(crate) fn dev_logging_enabled() -> bool {
    let on = std::env::var(ENV_DEV_LOG).ok().as_deref() == Some("1");
    if !on {
        return false;
    }
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var("SHUTTLE_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

/// Short, stable content id so logs never carry raw post text.
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

fn dev_log_categorization(event: &str, text: &str, scores: &[CategoryScore]) {
    if !dev_logging_enabled() {
        return;
    }
    let id = anon_hash(text);
    let top: Vec<String> = scores
        .iter()
        .take(5)
        .map(|s| format!("{}:{}", s.category, s.confidence))
        .collect();
    let primary = scores.first().map(|s| s.category).unwrap_or(Category::General);
    info!(
        target: "categorizer",
        %id, event, %primary,
        scores = ?top
    );
}
