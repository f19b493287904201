use crate::errors::ShortlistResult;

/// Embedding generation provider: text → fixed-length unit vector.
///
/// Deterministic for identical input given an identical model version.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a unit-normalized vector.
    fn embed(&self, text: &str) -> ShortlistResult<Vec<f32>>;

    /// Embed a batch of texts.
    fn embed_batch(&self, texts: &[String]) -> ShortlistResult<Vec<Vec<f32>>>;

    /// The dimensionality of vectors produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently usable.
    fn is_available(&self) -> bool;
}
