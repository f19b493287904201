/// Embedding provider errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("no embedding provider available")]
    NoProvider,

    #[error("provider '{provider}' failed: {reason}")]
    ProviderFailed { provider: String, reason: String },

    #[error("expected {expected}-dimensional vector, provider returned {actual}")]
    WrongDimensions { expected: usize, actual: usize },
}
