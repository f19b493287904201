//! Seams for external collaborators: embedding, reranking, generation.

mod embedding;
mod generator;
mod reranker;

pub use embedding::IEmbeddingProvider;
pub use generator::IAnswerGenerator;
pub use reranker::{IReranker, RerankOutcome};
