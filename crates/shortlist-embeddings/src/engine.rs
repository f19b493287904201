//! EmbeddingEngine — provider front-end with content-hash caching.

use moka::sync::Cache;
use tracing::debug;

use shortlist_core::errors::ShortlistResult;
use shortlist_core::traits::IEmbeddingProvider;

/// Default number of cached vectors.
pub const DEFAULT_CACHE_CAPACITY: u64 = 4096;

/// Wraps a provider with a blake3-keyed vector cache.
///
/// Implements `IEmbeddingProvider` itself, so it drops in anywhere a
/// provider is expected. The cache is thread-safe; the engine holds no
/// other mutable state, so concurrent queries share it freely.
pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: Cache<String, Vec<f32>>,
}

impl EmbeddingEngine {
    pub fn new(provider: Box<dyn IEmbeddingProvider>) -> Self {
        Self::with_capacity(provider, DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(provider: Box<dyn IEmbeddingProvider>, capacity: u64) -> Self {
        Self {
            provider,
            cache: Cache::new(capacity),
        }
    }

    fn embed_cached(&self, text: &str) -> ShortlistResult<Vec<f32>> {
        let key = blake3::hash(text.as_bytes()).to_hex().to_string();
        if let Some(hit) = self.cache.get(&key) {
            debug!(provider = self.provider.name(), "embedding cache hit");
            return Ok(hit);
        }
        let vector = self.provider.embed(text)?;
        self.cache.insert(key, vector.clone());
        Ok(vector)
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> ShortlistResult<Vec<f32>> {
        self.embed_cached(text)
    }

    fn embed_batch(&self, texts: &[String]) -> ShortlistResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed_cached(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    fn name(&self) -> &str {
        self.provider.name()
    }

    fn is_available(&self) -> bool {
        self.provider.is_available()
    }
}
