use crate::models::ScoredCandidate;

/// Outcome of a secondary rerank pass.
///
/// `Unavailable` is an explicit capability signal, not an error — the
/// pipeline keeps the prior ordering and continues. No blanket catch-all.
#[derive(Debug, Clone)]
pub enum RerankOutcome {
    /// Same membership up to the requested `top_n` truncation, new order.
    Reordered(Vec<ScoredCandidate>),
    /// The reranker cannot run; callers use the prior order.
    Unavailable,
}

/// Optional secondary reranker invoked on the scored pool before the
/// final sort. Best-effort: implementations report `Unavailable` instead
/// of failing the pipeline.
pub trait IReranker: Send + Sync {
    fn rerank(
        &self,
        query: &str,
        pool: Vec<ScoredCandidate>,
        top_n: usize,
    ) -> RerankOutcome;

    /// Human-readable reranker name.
    fn name(&self) -> &str;
}
