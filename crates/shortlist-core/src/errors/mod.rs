//! Error taxonomy: one enum per subsystem, wrapped by [`ShortlistError`].
//!
//! Input errors never reach this module — the parser is infallible by
//! contract. Data errors are fatal at load time and skip-and-continue
//! mid-query; dependency errors surface through the retrieval layer.

mod catalog_error;
mod embedding_error;
mod index_error;
mod retrieval_error;

pub use catalog_error::CatalogError;
pub use embedding_error::EmbeddingError;
pub use index_error::IndexError;
pub use retrieval_error::RetrievalError;

/// Convenience alias used across the workspace.
pub type ShortlistResult<T> = Result<T, ShortlistError>;

/// Top-level error wrapping every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum ShortlistError {
    #[error("catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("index error: {0}")]
    IndexError(#[from] IndexError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
