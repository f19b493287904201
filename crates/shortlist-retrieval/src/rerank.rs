//! Secondary rerank implementations.
//!
//! The seam is `IReranker` in shortlist-core; anything that can fail —
//! a missing model, a backend outage — reports `Unavailable` and the
//! pipeline keeps its prior ordering.

use shortlist_core::models::ScoredCandidate;
use shortlist_core::traits::{IReranker, RerankOutcome};

/// Rerank by query-term overlap with the candidate's skill and project
/// text. Membership-preserving up to the `top_n` truncation; candidates
/// with equal overlap keep their relative order (stable sort).
#[derive(Debug, Default)]
pub struct TermOverlapReranker;

impl TermOverlapReranker {
    pub fn new() -> Self {
        Self
    }

    fn overlap(query_terms: &[&str], candidate: &ScoredCandidate) -> usize {
        let haystack = format!(
            "{} {}",
            candidate.skills.join(" "),
            candidate.projects.join(" ")
        )
        .to_lowercase();
        query_terms
            .iter()
            .filter(|term| haystack.contains(**term))
            .count()
    }
}

impl IReranker for TermOverlapReranker {
    fn rerank(
        &self,
        query: &str,
        pool: Vec<ScoredCandidate>,
        top_n: usize,
    ) -> RerankOutcome {
        let lowered = query.to_lowercase();
        let terms: Vec<&str> = lowered.split_whitespace().collect();
        if terms.is_empty() {
            return RerankOutcome::Unavailable;
        }

        let mut keyed: Vec<(usize, ScoredCandidate)> = pool
            .into_iter()
            .map(|candidate| (Self::overlap(&terms, &candidate), candidate))
            .collect();
        keyed.sort_by(|a, b| b.0.cmp(&a.0));

        let mut reordered: Vec<ScoredCandidate> =
            keyed.into_iter().map(|(_, candidate)| candidate).collect();
        reordered.truncate(top_n);
        RerankOutcome::Reordered(reordered)
    }

    fn name(&self) -> &str {
        "term-overlap"
    }
}

/// A reranker that is never available. Exercises the capability-signal
/// path in tests and stands in where no reranker is deployed.
#[derive(Debug, Default)]
pub struct UnavailableReranker;

impl IReranker for UnavailableReranker {
    fn rerank(&self, _query: &str, _pool: Vec<ScoredCandidate>, _top_n: usize) -> RerankOutcome {
        RerankOutcome::Unavailable
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}
