//! # shortlist-core
//!
//! Foundation crate for the Shortlist staffing-match engine.
//! Defines domain models, traits, errors, config, constants, and the
//! skill lexicon. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod lexicon;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{BoostWeights, RetrievalConfig, SkillPolicy};
pub use errors::{ShortlistError, ShortlistResult};
pub use models::{Availability, BoostBreakdown, EmployeeRecord, ParsedQuery, ScoredCandidate};
pub use traits::{IAnswerGenerator, IEmbeddingProvider, IReranker, RerankOutcome};
