//! Lightweight scorer: raw weighted score of one text against one category rule.
//!
//! points = Σ keyword hits (1 each, counted)
//!        + 3 per phrase present
//!        + 2 per pattern present
//! score  = points × weight
//!
//! Keywords and phrases see the lowercased text; patterns see the original.

use serde::Serialize;

use crate::category::Category;
use crate::rules::CompiledRule;

pub const KEYWORD_POINTS: u64 = 1;
pub const PHRASE_POINTS: u64 = 3;
pub const PATTERN_POINTS: u64 = 2;

/// Weighted score of `text` for `rule`. Pure, never negative.
pub fn score(text: &str, rule: &CompiledRule) -> f64 {
    let lowered = text.to_lowercase();

    let mut points: u64 = 0;
    for kw in &rule.keywords {
        points = points.saturating_add(keyword_points(kw.count(&lowered)));
    }
    for phrase in rule.phrases {
        if lowered.contains(phrase) {
            points = points.saturating_add(PHRASE_POINTS);
        }
    }
    for pat in &rule.patterns {
        if pat.is_match(text) {
            points = points.saturating_add(PATTERN_POINTS);
        }
    }

    points as f64 * rule.weight
}

fn keyword_points(hits: usize) -> u64 {
    u64::try_from(hits)
        .unwrap_or(u64::MAX)
        .saturating_mul(KEYWORD_POINTS)
}

/// Which signals fired for one category, and what they added up to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub category: Category,
    /// `(keyword, occurrences)` for every keyword that hit at least once.
    pub keywords: Vec<(String, usize)>,
    pub phrases: Vec<String>,
    /// Source of every pattern that matched.
    pub patterns: Vec<String>,
    pub points: u64,
    pub weight: f64,
    pub score: f64,
}

/// Same computation as [`score`], keeping the evidence.
pub fn explain(text: &str, rule: &CompiledRule) -> ScoreBreakdown {
    let lowered = text.to_lowercase();

    let keywords: Vec<(String, usize)> = rule
        .keywords
        .iter()
        .map(|kw| (kw.term, kw.count(&lowered)))
        .filter(|(_, n)| *n > 0)
        .map(|(t, n)| (t.to_string(), n))
        .collect();

    let phrases: Vec<String> = rule
        .phrases
        .iter()
        .filter(|p| lowered.contains(*p))
        .map(|p| p.to_string())
        .collect();

    let patterns: Vec<String> = rule
        .patterns
        .iter()
        .filter(|p| p.is_match(text))
        .map(|p| p.source.to_string())
        .collect();

    let keyword_hits = keywords
        .iter()
        .fold(0usize, |acc, (_, n)| acc.saturating_add(*n));
    let points = keyword_points(keyword_hits)
        .saturating_add(PHRASE_POINTS * phrases.len() as u64)
        .saturating_add(PATTERN_POINTS * patterns.len() as u64);

    ScoreBreakdown {
        category: rule.category,
        keywords,
        phrases,
        patterns,
        points,
        weight: rule.weight,
        score: points as f64 * rule.weight,
    }
}
