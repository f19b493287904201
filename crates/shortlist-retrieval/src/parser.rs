//! Free-text hiring request → structured constraints.
//!
//! Literal substring and pattern detection only — the parser never fails
//! and never infers beyond what the text states. Unparseable input yields
//! an unconstrained query and the pipeline degrades to pure similarity.

use std::sync::LazyLock;

use regex::Regex;

use shortlist_core::lexicon;
use shortlist_core::models::{Availability, ParsedQuery};

/// First "<integer> [+] year[s]" mention wins.
static YEARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*\+?\s*years?").unwrap());

/// Word-like units: alphanumerics plus the skill punctuation set.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z0-9.+#-]+").unwrap());

/// Business-domain vocabulary, matched as substrings of the query.
const DOMAINS: &[&str] = &[
    "healthcare",
    "medical",
    "fintech",
    "ecommerce",
    "education",
    "banking",
    "insurance",
    "retail",
    "saas",
    "govt",
    "logistics",
    "pharma",
];

/// Query scaffolding words dropped before skill extraction.
const STOP_WORDS: &[&str] = &[
    "find",
    "need",
    "someone",
    "with",
    "for",
    "who",
    "has",
    "experience",
    "years",
    "year",
    "in",
    "a",
    "an",
    "the",
    "project",
];

/// Stateless query parser. `parse` always succeeds.
#[derive(Debug, Default)]
pub struct QueryParser;

impl QueryParser {
    pub fn new() -> Self {
        Self
    }

    /// Extract structured constraints from raw text.
    pub fn parse(&self, text: &str) -> ParsedQuery {
        let lowered = text.to_lowercase();

        // An integer too large for u32 is absurd input, treated as no match.
        let min_years = YEARS_RE
            .captures(&lowered)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok());

        let availability = parse_availability(&lowered);

        let mut skills: Vec<String> = Vec::new();
        for m in TOKEN_RE.find_iter(&lowered) {
            let token = m.as_str();
            if STOP_WORDS.contains(&token) || token.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            let normalized = lexicon::normalize(token);
            if !skills.contains(&normalized) {
                skills.push(normalized);
            }
        }

        let domains: Vec<String> = DOMAINS
            .iter()
            .filter(|d| lowered.contains(*d))
            .map(|d| (*d).to_string())
            .collect();

        ParsedQuery {
            min_years,
            availability,
            required_skills: (!skills.is_empty()).then_some(skills),
            domains: (!domains.is_empty()).then_some(domains),
            raw_query: text.to_string(),
        }
    }
}

/// First-match precedence over the availability phrases.
/// No match means unconstrained, not "must be allocated".
fn parse_availability(lowered: &str) -> Option<Availability> {
    if lowered.contains("immediate") || lowered.contains("available") {
        Some(Availability::Available)
    } else if ["2 weeks", "two weeks", "2_weeks"]
        .iter()
        .any(|p| lowered.contains(p))
    {
        Some(Availability::TwoWeeks)
    } else if ["1 month", "one month", "1_month"]
        .iter()
        .any(|p| lowered.contains(p))
    {
        Some(Availability::OneMonth)
    } else {
        None
    }
}
