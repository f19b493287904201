//! Named defaults for every tunable. Config structs reference these so
//! the TOML surface and the `Default` impls cannot drift apart.

/// Per-matched-skill soft boost.
pub const DEFAULT_SKILL_WEIGHT: f32 = 0.05;

/// Domain-in-projects soft boost (binary).
pub const DEFAULT_DOMAIN_WEIGHT: f32 = 0.10;

/// Experience-satisfied soft boost (binary).
pub const DEFAULT_YEARS_WEIGHT: f32 = 0.10;

/// Availability preference weight, scaled by ordinal rank.
pub const DEFAULT_AVAILABILITY_WEIGHT: f32 = 0.05;

/// First-stage fetch is `max(overfetch_floor, top_k)` — headroom for the
/// filter and boost stages before truncation.
pub const DEFAULT_OVERFETCH_FLOOR: usize = 30;

/// Pool size handed to the optional reranker.
pub const DEFAULT_RERANK_TOP_N: usize = 10;
