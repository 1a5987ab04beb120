// src/rules.rs
//! Rule Table: the fixed, hand-authored signals for every ruled category,
//! plus the compiled matchers built from them once per process.
//!
//! Three signal kinds per category:
//! - `keywords`: lowercase terms, matched as whole words on the lowercased text (1 pt per hit)
//! - `phrases`:  lowercase literal substrings on the lowercased text (3 pts, presence only)
//! - `patterns`: regexes over the original text (2 pts, presence only)
//!
//! Patterns carry their own flags: most start with `(?i)`, the few without it
//! rely on letter case (all-caps lead-ins, title abbreviations, cashtags).
//!
//! Table order is the iteration and tie-break order used by the classifier.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::category::Category;

/// Authored rule for one category. Immutable for the process lifetime.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
    pub phrases: &'static [&'static str],
    pub patterns: &'static [&'static str],
    pub weight: f64,
}

/* ----------------------------
Authored table
---------------------------- */

pub const RULES: [CategoryRule; 7] = [
    CategoryRule {
        category: Category::News,
        keywords: &[
            "breaking",
            "headline",
            "headlines",
            "report",
            "reports",
            "reported",
            "announced",
            "announcement",
            "update",
            "updates",
            "developing",
            "officials",
            "authorities",
            "investigation",
            "incident",
            "crisis",
            "emergency",
            "journalist",
            "press",
            "correspondent",
            "eyewitness",
            "statement",
        ],
        phrases: &[
            "breaking news",
            "just in",
            "according to",
            "sources say",
            "press conference",
            "officials said",
            "developing story",
            "live updates",
        ],
        patterns: &[
            // all-caps lead-in, case-sensitive on purpose
            r"\b(BREAKING|URGENT|UPDATE|JUST IN)\s*:",
            r"(?i)\b(reuters|associated press|ap news|bbc|cnn|al jazeera)\b",
            r"(?i)\bas of \d{1,2}(:\d{2})?\s*(am|pm)\b",
        ],
        weight: 0.5,
    },
    CategoryRule {
        category: Category::Sports,
        keywords: &[
            "team",
            "match",
            "goal",
            "goals",
            "football",
            "soccer",
            "basketball",
            "baseball",
            "tennis",
            "cricket",
            "rugby",
            "hockey",
            "golf",
            "championship",
            "tournament",
            "league",
            "playoff",
            "playoffs",
            "season",
            "coach",
            "player",
            "players",
            "athlete",
            "stadium",
            "referee",
            "score",
            "olympics",
            "medal",
            "striker",
            "quarterback",
            "touchdown",
            "fixture",
            "innings",
        ],
        phrases: &[
            "scored a goal",
            "won the match",
            "final whistle",
            "world cup",
            "hat trick",
            "hat-trick",
            "extra time",
            "penalty kick",
            "grand slam",
            "super bowl",
            "man of the match",
        ],
        patterns: &[
            // score notation like 2-1 or 3 - 0, not dates or ranges
            r"(?:^|[^\d-])\d{1,3}\s*-\s*\d{1,3}(?:$|[^\d-])",
            r"(?i)\b(nba|nfl|nhl|mlb|fifa|uefa|premier league|la liga|serie a|champions league)\b",
            r"(?i)\b(messi|ronaldo|lebron|federer|nadal|djokovic|mbappe)\b",
        ],
        weight: 1.3,
    },
    CategoryRule {
        category: Category::Entertainment,
        keywords: &[
            "movie",
            "movies",
            "film",
            "films",
            "actor",
            "actress",
            "celebrity",
            "celebrities",
            "music",
            "album",
            "song",
            "songs",
            "singer",
            "concert",
            "premiere",
            "trailer",
            "hollywood",
            "bollywood",
            "series",
            "episode",
            "showbiz",
            "comedy",
            "drama",
            "festival",
            "band",
            "rapper",
            "soundtrack",
            "cinema",
        ],
        phrases: &[
            "box office",
            "red carpet",
            "music video",
            "new album",
            "official trailer",
            "award show",
            "behind the scenes",
            "streaming now",
        ],
        patterns: &[
            r"(?i)\b(netflix|hbo|disney\+?|spotify|hulu|prime video)",
            r"(?i)\b(oscars?|grammys?|emmys?|golden globes?|bafta)\b",
            r"(?i)\bseason\s+\d+\b",
        ],
        weight: 1.1,
    },
    CategoryRule {
        category: Category::Technology,
        keywords: &[
            "technology",
            "tech",
            "software",
            "hardware",
            "app",
            "apps",
            "smartphone",
            "iphone",
            "computer",
            "laptop",
            "internet",
            "ai",
            "robot",
            "robotics",
            "algorithm",
            "code",
            "coding",
            "programming",
            "developer",
            "developers",
            "cybersecurity",
            "hacker",
            "hackers",
            "cloud",
            "blockchain",
            "gadget",
            "chip",
            "chips",
            "processor",
            "semiconductor",
            "data",
            "database",
        ],
        phrases: &[
            "artificial intelligence",
            "machine learning",
            "open source",
            "data breach",
            "software update",
            "virtual reality",
            "augmented reality",
            "quantum computing",
            "neural network",
        ],
        patterns: &[
            r"(?i)\b(apple|google|microsoft|openai|nvidia|samsung|meta|intel|amd)\b",
            r"(?i)\b(ios|android|windows|linux|macos)\s*\d+(\.\d+)*\b",
            r"(?i)\b\d+\s*(gb|tb|ghz|mhz|mp)\b",
            r"(?i)\b(5g|wi-?fi|bluetooth|usb-c)\b",
        ],
        weight: 1.2,
    },
    CategoryRule {
        category: Category::Politics,
        keywords: &[
            "politics",
            "political",
            "election",
            "elections",
            "vote",
            "votes",
            "voting",
            "voter",
            "voters",
            "government",
            "president",
            "senator",
            "senate",
            "congress",
            "parliament",
            "minister",
            "governor",
            "mayor",
            "campaign",
            "policy",
            "legislation",
            "democrat",
            "democrats",
            "republican",
            "republicans",
            "democracy",
            "ballot",
            "lawmakers",
            "diplomat",
            "diplomacy",
            "sanctions",
            "referendum",
            "candidate",
            "opposition",
        ],
        phrases: &[
            "prime minister",
            "white house",
            "supreme court",
            "executive order",
            "foreign policy",
            "polling station",
            "state of the union",
            "national assembly",
        ],
        patterns: &[
            r"(?i)\b(gop|dnc|rnc|nato|united nations)\b",
            // title abbreviation followed by a capitalized name
            r"\b(Sen|Rep|Gov|Pres)\.\s+[A-Z][a-z]+",
            r"(?i)\b(biden|trump|obama|macron|putin|zelensky|modi)\b",
        ],
        weight: 1.4,
    },
    CategoryRule {
        category: Category::Business,
        keywords: &[
            "business",
            "economy",
            "economic",
            "stock",
            "stocks",
            "market",
            "markets",
            "investor",
            "investors",
            "investment",
            "finance",
            "financial",
            "bank",
            "banking",
            "revenue",
            "profit",
            "profits",
            "earnings",
            "startup",
            "startups",
            "company",
            "companies",
            "ceo",
            "merger",
            "acquisition",
            "inflation",
            "trade",
            "shares",
            "dividend",
            "ipo",
            "entrepreneur",
            "retail",
            "sales",
            "funding",
        ],
        phrases: &[
            "interest rates",
            "quarterly earnings",
            "wall street",
            "federal reserve",
            "supply chain",
            "venture capital",
            "market cap",
            "annual report",
        ],
        patterns: &[
            // dollar amounts
            r"\$\d[\d,]*(\.\d+)?",
            // cashtags like $AAPL
            r"\$[A-Z]{1,5}\b",
            r"(?i)\b(nasdaq|dow jones|nyse|ftse|s&p 500)",
            r"\b\d+(\.\d+)?\s?%",
        ],
        weight: 1.2,
    },
    CategoryRule {
        category: Category::Lifestyle,
        keywords: &[
            "lifestyle",
            "fashion",
            "style",
            "beauty",
            "makeup",
            "skincare",
            "fitness",
            "workout",
            "yoga",
            "wellness",
            "health",
            "healthy",
            "diet",
            "recipe",
            "recipes",
            "food",
            "cooking",
            "travel",
            "vacation",
            "home",
            "decor",
            "garden",
            "gardening",
            "parenting",
            "relationship",
            "wedding",
            "meditation",
            "outfit",
        ],
        phrases: &[
            "self care",
            "self-care",
            "work life balance",
            "weight loss",
            "home decor",
            "mental health",
            "skin care routine",
            "travel tips",
            "healthy eating",
        ],
        patterns: &[
            r"(?i)#(ootd|fitfam|selfcare|wanderlust|foodie|travelgram)\b",
            r"(?i)\b\d+\s*(calories|kcal|reps)\b",
            r"(?i)\b(vegan|keto|paleo|gluten-free)\b",
        ],
        weight: 0.8,
    },
];

/* ----------------------------
Compiled engine structures
---------------------------- */

#[derive(Debug)]
pub struct KeywordMatcher {
    pub term: &'static str,
    re: Regex,
}

impl KeywordMatcher {
    /// Non-overlapping whole-word occurrences in already-lowercased text.
    pub fn count(&self, lowered: &str) -> usize {
        self.re.find_iter(lowered).count()
    }
}

#[derive(Debug)]
pub struct PatternMatcher {
    pub source: &'static str,
    re: Regex,
}

impl PatternMatcher {
    pub fn is_match(&self, text: &str) -> bool {
        self.re.is_match(text)
    }
}

/// A category rule with every matcher compiled up front.
#[derive(Debug)]
pub struct CompiledRule {
    pub category: Category,
    pub weight: f64,
    pub keywords: Vec<KeywordMatcher>,
    pub phrases: &'static [&'static str],
    pub patterns: Vec<PatternMatcher>,
}

impl CompiledRule {
    pub fn compile(rule: &CategoryRule) -> Result<Self, regex::Error> {
        let keywords = rule
            .keywords
            .iter()
            .map(|&term| {
                let re = Regex::new(&format!(r"\b{}\b", regex::escape(term)))?;
                Ok(KeywordMatcher { term, re })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        let patterns = rule
            .patterns
            .iter()
            .map(|&source| Ok(PatternMatcher { source, re: Regex::new(source)? }))
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self {
            category: rule.category,
            weight: rule.weight,
            keywords,
            phrases: rule.phrases,
            patterns,
        })
    }

    pub fn summary(&self) -> RuleSummary {
        RuleSummary {
            category: self.category,
            weight: self.weight,
            keywords: self.keywords.len(),
            phrases: self.phrases.len(),
            patterns: self.patterns.len(),
        }
    }
}

/// Matcher counts for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct RuleSummary {
    pub category: Category,
    pub weight: f64,
    pub keywords: usize,
    pub phrases: usize,
    pub patterns: usize,
}

static RULE_TABLE: Lazy<Vec<CompiledRule>> = Lazy::new(|| {
    RULES
        .iter()
        .map(|rule| {
            let compiled = CompiledRule::compile(rule).unwrap_or_else(|e| {
                panic!("rule table for `{}` failed to compile: {e}", rule.category)
            });
            debug!(
                target: "categorizer",
                category = %compiled.category,
                keywords = compiled.keywords.len(),
                phrases = compiled.phrases.len(),
                patterns = compiled.patterns.len(),
                "compiled category rule"
            );
            compiled
        })
        .collect()
});

/// The compiled Rule Table in iteration order. Built on first use.
pub fn rule_table() -> &'static [CompiledRule] {
    RULE_TABLE.as_slice()
}

/// Compiled rule for `category`; `None` for `General`.
pub fn rule_for(category: Category) -> Option<&'static CompiledRule> {
    rule_table().iter().find(|r| r.category == category)
}

pub fn summaries() -> Vec<RuleSummary> {
    rule_table().iter().map(CompiledRule::summary).collect()
}
