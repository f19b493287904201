//! Engine configuration, serde-backed and TOML-overridable.

pub mod defaults;
mod retrieval_config;

pub use retrieval_config::{BoostWeights, RetrievalConfig, SkillPolicy};
