//! Synthetic property suite over programmatically built posts.
//! Deterministic: a fixed seed drives every generated sentence.

use post_categorizer::classifier::explain_content;
use post_categorizer::rules::rule_for;
use post_categorizer::scorer::score;
use post_categorizer::{categorize_content, Category};
use rand::{rngs::StdRng, Rng, SeedableRng};

const EPS: f64 = 1e-9;

/* ----------------------------
Vocab banks
---------------------------- */
const SIGNAL_WORDS: &[&str] = &[
    "team", "goal", "football", "election", "senate", "stock", "market", "album", "movie",
    "software", "ai", "yoga", "recipe", "breaking", "officials", "white house", "box office",
    "world cup", "machine learning", "self care", "3-1", "$TSLA", "12%", "BREAKING:",
    "Sen. Smith", "#ootd", "NBA", "Netflix", "iOS 17", "Putin",
];

const NOISE_WORDS: &[&str] = &[
    "the", "a", "quiet", "blue", "yesterday", "walked", "over", "with", "friends", "and",
    "then", "nothing", "really", "happened", "lorem", "ipsum", "zebra", "teams", "goals!",
];

fn sentence(rng: &mut StdRng) -> String {
    let len = rng.random_range(1..14);
    let mut words = Vec::with_capacity(len);
    for _ in 0..len {
        let w = if rng.random_bool(0.35) {
            SIGNAL_WORDS[rng.random_range(0..SIGNAL_WORDS.len())]
        } else {
            NOISE_WORDS[rng.random_range(0..NOISE_WORDS.len())]
        };
        words.push(w);
    }
    words.join(" ")
}

fn corpus(seed: u64, n: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| sentence(&mut rng)).collect()
}

#[test]
fn categorization_is_deterministic() {
    for text in corpus(0xC0FF_EE00_2025_1019, 200) {
        assert_eq!(categorize_content(&text), categorize_content(&text), "{text}");
    }
}

#[test]
fn confidence_sums_to_100_within_rounding() {
    for text in corpus(0x5EED_0001, 300) {
        let r = categorize_content(&text);
        if r.len() == 1 && r[0].category == Category::General {
            continue;
        }
        let n = r.len() as i32;
        let sum: i32 = r.iter().map(|s| i32::from(s.confidence)).sum();
        assert!(
            (sum - 100).abs() <= n - 1,
            "sum {sum} with {n} categories for `{text}`: {r:?}"
        );
    }
}

#[test]
fn result_shape_invariants() {
    for text in corpus(0x5EED_0002, 300) {
        let r = categorize_content(&text);
        assert!(!r.is_empty());
        let has_general = r.iter().any(|s| s.category == Category::General);
        if has_general {
            assert_eq!(r.len(), 1, "general must stand alone: {r:?}");
            assert_eq!(r[0].score, 0.0);
        } else {
            assert!(r.iter().all(|s| s.score > 0.0));
            assert!(r.windows(2).all(|w| w[0].score >= w[1].score), "{r:?}");
        }
        assert!(r.iter().all(|s| s.confidence <= 100));
    }
}

#[test]
fn repeating_a_matched_keyword_never_lowers_score() {
    let keywords = [
        (Category::Sports, "goal"),
        (Category::Politics, "election"),
        (Category::Business, "stock"),
        (Category::Technology, "software"),
        (Category::Lifestyle, "yoga"),
    ];
    for text in corpus(0x5EED_0003, 150) {
        for (category, kw) in keywords {
            let rule = rule_for(category).unwrap();
            let base = format!("{text} {kw}");
            let more = format!("{base} {kw}");
            let before = score(&base, rule);
            let after = score(&more, rule);
            assert!(after >= before, "{category} `{kw}`: {after} < {before}");
            assert!((after - before - rule.weight).abs() < EPS);
        }
    }
}

#[test]
fn score_is_points_times_weight() {
    for text in corpus(0x5EED_0004, 200) {
        for b in explain_content(&text) {
            let rule = rule_for(b.category).unwrap();
            assert!((b.score - b.points as f64 * rule.weight).abs() < EPS);
            assert!((b.score - score(&text, rule)).abs() < EPS);
        }
    }
}
