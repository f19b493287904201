//! # shortlist-embeddings
//!
//! Embedding providers and the catalog → index build path. The engine
//! wraps any provider with content-hash caching; the hashed term-frequency
//! provider keeps the pipeline fully deterministic and dependency-free, so
//! ranking works the same in air-gapped environments.

pub mod engine;
pub mod indexer;
pub mod providers;

pub use engine::EmbeddingEngine;
pub use providers::HashedTermProvider;
