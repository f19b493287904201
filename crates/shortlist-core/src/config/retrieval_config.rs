use serde::{Deserialize, Serialize};

use super::defaults;

/// Whether required skills act as a hard filter or only as a soft boost.
///
/// The default pipeline treats skills as soft to avoid over-pruning a
/// small candidate pool; `Hard` makes the strict filter pass require full
/// skill membership. Pick one policy per deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillPolicy {
    #[default]
    Soft,
    Hard,
}

/// Soft-boost weights, one per scoring factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostWeights {
    /// Added once per matched required skill (uncapped total).
    pub skill: f32,
    /// Added once if any requested domain appears in the projects.
    pub domain: f32,
    /// Added once if the experience requirement is satisfied.
    pub years: f32,
    /// Scaled by availability ordinal / max ordinal; always applied.
    pub availability: f32,
}

impl Default for BoostWeights {
    fn default() -> Self {
        Self {
            skill: defaults::DEFAULT_SKILL_WEIGHT,
            domain: defaults::DEFAULT_DOMAIN_WEIGHT,
            years: defaults::DEFAULT_YEARS_WEIGHT,
            availability: defaults::DEFAULT_AVAILABILITY_WEIGHT,
        }
    }
}

/// Retrieval pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// First-stage fetch size floor; the search fetches
    /// `max(overfetch_floor, top_k)` rows.
    pub overfetch_floor: usize,
    /// Hard-filter policy for required skills.
    pub skill_policy: SkillPolicy,
    /// When set, relaxation stage 2 requires skill membership before
    /// falling through to the unfiltered pool.
    pub relax_requires_skills: bool,
    /// Pool size handed to the optional reranker.
    pub rerank_top_n: usize,
    pub weights: BoostWeights,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            overfetch_floor: defaults::DEFAULT_OVERFETCH_FLOOR,
            skill_policy: SkillPolicy::default(),
            relax_requires_skills: false,
            rerank_top_n: defaults::DEFAULT_RERANK_TOP_N,
            weights: BoostWeights::default(),
        }
    }
}

impl RetrievalConfig {
    /// Parse a TOML override document; unset keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}
