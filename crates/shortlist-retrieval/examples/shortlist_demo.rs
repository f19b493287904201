//! Minimal end-to-end demo: load a roster, build the index, rank a query,
//! and print the shortlist with its answer context.
//!
//! Run with `RUST_LOG=debug` to watch the pipeline stages.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use shortlist_core::config::RetrievalConfig;
use shortlist_embeddings::indexer::build_index;
use shortlist_embeddings::{EmbeddingEngine, HashedTermProvider};
use shortlist_retrieval::{generation, RetrievalEngine, TermOverlapReranker};
use shortlist_storage::Catalog;

const ROSTER: &str = r#"{
    "employees": [
        {
            "id": 1,
            "name": "Asha Rao",
            "skills": ["k8s", "go", "terraform"],
            "projects": ["ecommerce checkout platform", "cluster cost tooling"],
            "experience_years": 5,
            "availability": "available"
        },
        {
            "id": 2,
            "name": "Ben Okafor",
            "skills": ["java", "spring", "pgsql"],
            "projects": ["banking core ledger"],
            "experience_years": 9,
            "availability": "1_month"
        },
        {
            "id": 3,
            "name": "Carla Mendes",
            "skills": ["python", "tf", "sklearn"],
            "projects": ["healthcare triage model", "clinical notes search"],
            "experience_years": 7,
            "availability": "2_weeks"
        },
        {
            "id": 4,
            "name": "Deepak Shah",
            "skills": ["rust", "postgresql", "aws"],
            "projects": ["fintech fraud scoring"],
            "experience_years": 3,
            "availability": "allocated"
        }
    ]
}"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let catalog = Catalog::from_json_str(ROSTER)?;
    let embedder = EmbeddingEngine::new(Box::new(HashedTermProvider::default()));
    let (index, mapping) = build_index(&catalog, &embedder)?;

    let reranker = TermOverlapReranker::new();
    let engine = RetrievalEngine::new(
        &catalog,
        &index,
        &mapping,
        &embedder,
        RetrievalConfig::default(),
    )?
    .with_reranker(&reranker);

    let query = "Need someone with 3+ years kubernetes experience, available immediately";
    let result = engine.shortlist_detailed(query, 3)?;

    println!("query: {query}");
    println!("filter stage: {:?}\n", result.stage);
    for (rank, candidate) in result.candidates.iter().enumerate() {
        println!(
            "#{rank} {name} — score {score:.4} (cosine {cosine:.4} + boost {boost:.4}), {availability}",
            rank = rank + 1,
            name = candidate.name,
            score = candidate.match_score,
            cosine = candidate.similarity,
            boost = candidate.boost,
            availability = candidate.availability,
        );
    }

    println!("\n--- generation context ---");
    println!("{}", generation::build_context(query, &result.candidates));

    Ok(())
}
