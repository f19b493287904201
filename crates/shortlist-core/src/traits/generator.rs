use crate::errors::ShortlistResult;

/// Answer generation backend: ranked context → prose recommendation.
///
/// A failure here never reaches the end user — the caller substitutes the
/// fixed fallback reply and keeps the shortlist.
pub trait IAnswerGenerator: Send + Sync {
    fn generate(&self, context: &str) -> ShortlistResult<String>;

    /// Human-readable generator name.
    fn name(&self) -> &str;
}
