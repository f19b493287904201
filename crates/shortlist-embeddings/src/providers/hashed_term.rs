//! Hashed term-frequency embedding provider.
//!
//! Generates fixed-dimension unit vectors by hashing terms into buckets
//! and weighting by term frequency. Not as semantically rich as a neural
//! encoder, but deterministic and always available.

use std::collections::HashMap;

use shortlist_core::errors::ShortlistResult;
use shortlist_core::traits::IEmbeddingProvider;

/// Default dimensionality, matching the usual sentence-encoder width.
pub const DEFAULT_DIMENSIONS: usize = 384;

/// Deterministic hashed term-frequency provider.
///
/// The tokenizer keeps `.`, `+`, `#`, and `-` inside tokens so skill
/// spellings like `c++`, `c#`, and `node.js` survive as single terms —
/// the same token class the query parser extracts.
pub struct HashedTermProvider {
    dimensions: usize,
}

impl HashedTermProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    /// Tokenize into lowercase terms, keeping skill punctuation.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && !".+#-".contains(c))
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// Build a weighted term-frequency vector for the text.
    fn term_vector(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        let mut frequencies: HashMap<String, f32> = HashMap::new();
        for token in &tokens {
            *frequencies.entry(token.clone()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        let mut vector = vec![0.0f32; self.dimensions];
        for (term, count) in &frequencies {
            let freq = count / total;
            // Longer terms carry more signal than scaffolding words.
            let weight = 1.0 + (term.len() as f32).ln();
            let bucket = Self::hash_term(term, self.dimensions);
            vector[bucket] += freq * weight;
        }

        // L2 normalize so inner product is cosine similarity.
        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for value in &mut vector {
                *value /= norm;
            }
        }

        vector
    }
}

impl Default for HashedTermProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

impl IEmbeddingProvider for HashedTermProvider {
    fn embed(&self, text: &str) -> ShortlistResult<Vec<f32>> {
        Ok(self.term_vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> ShortlistResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-term"
    }

    fn is_available(&self) -> bool {
        true
    }
}
