/// Shortlist engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator between fields of the canonical index description.
pub const DESCRIPTION_SEPARATOR: &str = " | ";

/// Sentinel row index the vector index uses to pad short result sets.
/// Callers filter it, the index never does.
pub const NO_ROW: i64 = -1;

/// Fixed polite reply substituted when answer generation fails.
pub const FALLBACK_ANSWER: &str = "Thank you for your query! I've found some matching candidates. \
     Would you like me to share their details?";
