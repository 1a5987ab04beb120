// tests/categorize_scenarios.rs
// Hand-picked scenarios for the categorization engine.
// Self-contained: the Rule Table is compiled into the crate.

use post_categorizer::classifier::explain_content;
use post_categorizer::{
    belongs_to_category, categorize_content, filter_posts_by_category, get_post_categories,
    get_primary_category, Category, CategoryScore, Post,
};

const EPS: f64 = 1e-9;
const SPLIT: &str = "The football team won the championship and the stock market rallied today";

fn only(category: Category, score: f64, confidence: u8, got: &[CategoryScore]) {
    assert_eq!(got.len(), 1, "expected a single entry, got: {:?}", got);
    assert_eq!(got[0].category, category, "{:?}", got);
    assert!(
        (got[0].score - score).abs() < EPS,
        "score {} != {}",
        got[0].score,
        score
    );
    assert_eq!(got[0].confidence, confidence);
}

#[test]
fn empty_input_is_general_with_zero_confidence() {
    only(Category::General, 0.0, 0, &categorize_content(""));
    only(Category::General, 0.0, 0, &categorize_content("   "));
}

#[test]
fn unmatched_input_is_general_with_full_confidence() {
    // Known asymmetry with the empty case above; both are intended outputs.
    only(Category::General, 0.0, 100, &categorize_content("asdfgh qwerty"));
}

#[test]
fn sports_dominates_goal_sentence() {
    only(
        Category::Sports,
        11.7,
        100,
        &categorize_content("team scored a goal and won the match"),
    );
}

#[test]
fn sports_and_business_split() {
    let r = categorize_content(SPLIT);
    assert_eq!(r.len(), 2, "{:?}", r);
    assert_eq!(r[0].category, Category::Sports);
    assert!((r[0].score - 3.9).abs() < EPS);
    assert_eq!(r[0].confidence, 62);
    assert_eq!(r[1].category, Category::Business);
    assert!((r[1].score - 2.4).abs() < EPS);
    assert_eq!(r[1].confidence, 38);
}

#[test]
fn thresholds_on_split_sentence() {
    assert_eq!(get_primary_category(SPLIT, 30), Category::Sports);
    assert!(belongs_to_category(SPLIT, Category::Business, 25));
    assert!(!belongs_to_category(SPLIT, Category::Business, 50));
}

#[test]
fn general_filter_is_identity() {
    let posts = vec![
        Post::new("a", "asdfgh"),
        Post::new("b", SPLIT),
        Post::new("c", ""),
    ];
    for min in [0, 20, 100] {
        let out = filter_posts_by_category(&posts, Category::General, min);
        assert_eq!(out, posts.iter().collect::<Vec<_>>());
    }
}

#[test]
fn news_with_politics() {
    let text = "Breaking news: the president announced new sanctions at a press conference";
    let r = categorize_content(text);
    assert_eq!(r[0].category, Category::News);
    assert!((r[0].score - 4.5).abs() < EPS);
    assert_eq!(r[0].confidence, 62);
    assert_eq!(r[1].category, Category::Politics);
    assert!((r[1].score - 2.8).abs() < EPS);
    assert_eq!(r[1].confidence, 38);
}

#[test]
fn all_caps_lead_in_only_counts_in_caps() {
    let loud = categorize_content("BREAKING: election results are in");
    assert_eq!(loud[0].category, Category::News);
    assert_eq!(loud[0].confidence, 52);

    let quiet = categorize_content("breaking: election results are in");
    assert_eq!(quiet[0].category, Category::Politics);
    assert_eq!(quiet[0].confidence, 74);
}

#[test]
fn technology_release_note() {
    let text = "Apple released iOS 18 with new AI features and a software update";
    let r = categorize_content(text);
    assert_eq!(r[0].category, Category::Technology);
    assert!((r[0].score - 10.8).abs() < EPS);
    assert_eq!(r[0].confidence, 96);
    assert_eq!(r[1].category, Category::News);
    assert_eq!(r[1].confidence, 4);
    assert_eq!(get_post_categories(text, 20), vec![Category::Technology]);
}

#[test]
fn business_markers() {
    let text = "Shares of $AAPL rose 5% after quarterly earnings beat Wall Street estimates";
    only(Category::Business, 14.4, 100, &categorize_content(text));
}

#[test]
fn lifestyle_and_entertainment_posts() {
    only(
        Category::Lifestyle,
        6.4,
        100,
        &categorize_content("My morning yoga workout and a healthy vegan recipe #selfcare"),
    );
    only(
        Category::Entertainment,
        7.7,
        100,
        &categorize_content("The new Netflix series premiere hit the red carpet"),
    );
}

#[test]
fn politics_title_abbreviation() {
    only(
        Category::Politics,
        8.4,
        100,
        &categorize_content("Sen. Warren criticized the White House policy"),
    );
}

#[test]
fn three_way_split_rounds_independently() {
    let r = categorize_content("Our team shipped the app update");
    let got: Vec<(Category, u8)> = r.iter().map(|s| (s.category, s.confidence)).collect();
    assert_eq!(
        got,
        vec![
            (Category::Sports, 43),
            (Category::Technology, 40),
            (Category::News, 17)
        ]
    );
}

#[test]
fn breakdown_explains_the_split() {
    let b = explain_content(SPLIT);
    let sports = b.iter().find(|x| x.category == Category::Sports).unwrap();
    let names: Vec<&str> = sports.keywords.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["team", "football", "championship"]);
    let business = b.iter().find(|x| x.category == Category::Business).unwrap();
    let names: Vec<&str> = business.keywords.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["stock", "market"]);
    assert!(business.phrases.is_empty());
}

#[test]
fn dated_news_is_not_a_scoreline() {
    let text = "Officials said on 2024-10-19 the investigation continues";
    // officials + investigation + "officials said" = 5 pts × 0.5
    only(Category::News, 2.5, 100, &categorize_content(text));
    assert_eq!(get_primary_category(text, 30), Category::News);

    // a real scoreline next to a date still counts once
    let text = "The match ended 3-1 on 2024-10-19";
    only(Category::Sports, 3.9, 100, &categorize_content(text));
}
