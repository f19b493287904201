//! RetrievalEngine: orchestrates the full ranking pipeline.
//!
//! parse → embed query → overfetched vector search → resolve rows →
//! hard filter with relaxation → soft score → optional rerank → sort →
//! truncate. All collaborators are injected read-only at construction,
//! so concurrent calls share one engine without locking.

use tracing::{debug, info, warn};

use shortlist_core::config::RetrievalConfig;
use shortlist_core::errors::{RetrievalError, ShortlistResult};
use shortlist_core::models::{ParsedQuery, ScoredCandidate};
use shortlist_core::traits::{IEmbeddingProvider, IReranker, RerankOutcome};
use shortlist_storage::{Catalog, FlatIpIndex, RowMapping};

use crate::filter::{self, PoolEntry, RelaxationStage};
use crate::parser::QueryParser;
use crate::scorer;

/// Full result of a ranking call: the ordered shortlist plus the parsed
/// constraints and the filter stage that produced the pool — the debug
/// surface alongside the plain candidate list.
#[derive(Debug, Clone)]
pub struct Shortlist {
    pub candidates: Vec<ScoredCandidate>,
    pub parsed: ParsedQuery,
    pub stage: RelaxationStage,
}

/// The ranking engine. Stateless across calls: identical query text and
/// identical catalog state always produce identical ranked output.
pub struct RetrievalEngine<'a> {
    catalog: &'a Catalog,
    index: &'a FlatIpIndex,
    mapping: &'a RowMapping,
    embedder: &'a dyn IEmbeddingProvider,
    reranker: Option<&'a dyn IReranker>,
    parser: QueryParser,
    config: RetrievalConfig,
}

impl<'a> std::fmt::Debug for RetrievalEngine<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetrievalEngine")
            .field("has_reranker", &self.reranker.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> RetrievalEngine<'a> {
    /// Build an engine over read-only shared state. Fails fast when the
    /// row mapping does not cover the index rows.
    pub fn new(
        catalog: &'a Catalog,
        index: &'a FlatIpIndex,
        mapping: &'a RowMapping,
        embedder: &'a dyn IEmbeddingProvider,
        config: RetrievalConfig,
    ) -> ShortlistResult<Self> {
        mapping.validate_against(index)?;
        Ok(Self {
            catalog,
            index,
            mapping,
            embedder,
            reranker: None,
            parser: QueryParser::new(),
            config,
        })
    }

    /// Attach an optional secondary reranker.
    pub fn with_reranker(mut self, reranker: &'a dyn IReranker) -> Self {
        self.reranker = Some(reranker);
        self
    }

    /// Rank the catalog against a hiring request.
    pub fn shortlist(&self, query: &str, top_k: usize) -> ShortlistResult<Vec<ScoredCandidate>> {
        Ok(self.shortlist_detailed(query, top_k)?.candidates)
    }

    /// As [`Self::shortlist`], also exposing the parsed constraints and
    /// the relaxation stage.
    pub fn shortlist_detailed(&self, query: &str, top_k: usize) -> ShortlistResult<Shortlist> {
        let parsed = self.parser.parse(query);
        debug!(
            min_years = ?parsed.min_years,
            availability = ?parsed.availability,
            skills = parsed.required_skills.as_ref().map_or(0, Vec::len),
            domains = parsed.domains.as_ref().map_or(0, Vec::len),
            "query parsed"
        );

        // No data is distinct from no constraint-satisfying data: an empty
        // index returns an empty shortlist without touching the ladder.
        if self.index.rows() == 0 {
            debug!("vector index is empty, nothing to rank");
            return Ok(Shortlist {
                candidates: Vec::new(),
                parsed,
                stage: RelaxationStage::Strict,
            });
        }

        let query_vector =
            self.embedder
                .embed(query)
                .map_err(|e| RetrievalError::QueryEmbeddingFailed {
                    reason: e.to_string(),
                })?;

        let overfetch = self.config.overfetch_floor.max(top_k);
        let hits = self.index.search(&query_vector, overfetch)?;

        // Resolve rows to employees. Sentinel rows are dropped here; a
        // mapped id missing from the catalog skips that row only.
        let mut pool: Vec<PoolEntry<'_>> = Vec::with_capacity(hits.len());
        for (similarity, row) in hits {
            let Some(id) = self.mapping.resolve(row) else {
                continue;
            };
            match self.catalog.get(id) {
                Some(employee) => pool.push(PoolEntry {
                    similarity,
                    employee,
                }),
                None => warn!(id, row, "row mapping points at unknown employee, skipping"),
            }
        }

        let (filtered, stage) = filter::apply(&pool, &parsed, &self.config);
        debug!(
            pool = pool.len(),
            filtered = filtered.len(),
            ?stage,
            "hard filtering complete"
        );

        let mut candidates: Vec<ScoredCandidate> = filtered
            .iter()
            .map(|entry| {
                let breakdown = scorer::boost(entry.employee, &parsed, &self.config.weights);
                ScoredCandidate::new(entry.employee, entry.similarity, breakdown.total())
            })
            .collect();

        if let Some(reranker) = self.reranker {
            match reranker.rerank(query, candidates.clone(), self.config.rerank_top_n) {
                RerankOutcome::Reordered(reordered) => {
                    debug!(
                        reranker = reranker.name(),
                        pool = reordered.len(),
                        "rerank applied"
                    );
                    candidates = reordered;
                }
                RerankOutcome::Unavailable => {
                    debug!(reranker = reranker.name(), "reranker unavailable, keeping order");
                }
            }
        }

        // Final order: score descending, sooner availability wins ties.
        candidates.sort_by(final_order);
        candidates.truncate(top_k);

        info!(
            returned = candidates.len(),
            ?stage,
            "shortlist complete"
        );

        Ok(Shortlist {
            candidates,
            parsed,
            stage,
        })
    }
}

/// Comparator for the final ordering: match score descending, then
/// availability ordinal descending — equal scores break toward sooner
/// availability. Used with a stable sort, so exact ties keep pool order.
pub fn final_order(a: &ScoredCandidate, b: &ScoredCandidate) -> std::cmp::Ordering {
    b.match_score
        .partial_cmp(&a.match_score)
        .unwrap_or(std::cmp::Ordering::Equal)
        .then_with(|| b.availability.ordinal().cmp(&a.availability.ordinal()))
}
