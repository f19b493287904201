//! Structured constraints extracted from a free-text hiring request.

use serde::{Deserialize, Serialize};

use super::employee::Availability;

/// The constraint set a query parses into.
///
/// Every field except `raw_query` is independently optional: `None` means
/// "no constraint", never "constraint of zero/empty". A present skill or
/// domain set is never empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// Minimum whole years of experience.
    pub min_years: Option<u32>,
    /// Required availability bucket.
    pub availability: Option<Availability>,
    /// Normalized skill tokens, deduplicated, first-seen order.
    pub required_skills: Option<Vec<String>>,
    /// Business-domain tokens found in the text.
    pub domains: Option<Vec<String>>,
    /// Original text, preserved verbatim for logging and answer context.
    pub raw_query: String,
}

impl ParsedQuery {
    /// A query with no recognized constraints.
    pub fn unconstrained(raw: &str) -> Self {
        Self {
            raw_query: raw.to_string(),
            ..Self::default()
        }
    }

    /// True when no constraint field is set.
    pub fn is_unconstrained(&self) -> bool {
        self.min_years.is_none()
            && self.availability.is_none()
            && self.required_skills.is_none()
            && self.domains.is_none()
    }
}
