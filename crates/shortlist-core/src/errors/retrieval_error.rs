/// Retrieval pipeline errors.
///
/// A query that merely matches nothing is not an error — the relaxation
/// ladder handles that. These are dependency failures the caller must see.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("query embedding failed: {reason}")]
    QueryEmbeddingFailed { reason: String },

    #[error("answer generation failed: {reason}")]
    GenerationFailed { reason: String },
}
