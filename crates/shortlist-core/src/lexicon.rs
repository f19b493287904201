//! Skill token canonicalization and index-time alias expansion.
//!
//! Normalization is 1:1 and deterministic — both indexing and querying run
//! tokens through it, so vocabulary matches regardless of the abbreviation
//! used. Expansion is 1:many and enriches the searchable text at
//! index-build time only; it is never applied to queries.

use std::collections::{BTreeSet, HashMap};

/// Abbreviation → canonical form. 1:1, applied by [`normalize`].
fn alias_map() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("k8s", "kubernetes"),
        ("tf", "tensorflow"),
        ("rn", "react native"),
        ("js", "javascript"),
        ("ts", "typescript"),
        ("sklearn", "scikit-learn"),
        ("pgsql", "postgresql"),
        ("py", "python"),
    ])
}

/// Canonical form → known aliases. 1:many, index-build enrichment only.
/// Multi-directional relations appear under both spellings.
fn expansion_map() -> HashMap<&'static str, &'static [&'static str]> {
    let mut m = HashMap::new();
    m.insert("kubernetes", &["k8s"][..]);
    m.insert("tensorflow", &["tf"][..]);
    m.insert("react native", &["rn"][..]);
    m.insert("javascript", &["js"][..]);
    m.insert("typescript", &["ts"][..]);
    m.insert("scikit-learn", &["sklearn"][..]);
    m.insert("postgresql", &["pgsql"][..]);
    m.insert("python", &["py"][..]);
    m.insert("aws", &["amazon web services"][..]);
    m.insert("amazon web services", &["aws"][..]);
    m
}

/// Canonicalize a skill token: trim, lowercase, fold known aliases.
/// Unknown tokens pass through unchanged. Idempotent.
pub fn normalize(token: &str) -> String {
    let t = token.trim().to_lowercase();
    match alias_map().get(t.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => t,
    }
}

/// Normalize a skill list, deduplicating while preserving first-seen order.
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for skill in skills {
        let normalized = normalize(skill);
        if !seen.contains(&normalized) {
            seen.push(normalized);
        }
    }
    seen
}

/// Expand a skill set with known aliases for index-time text enrichment.
///
/// Tokens are normalized first, then each canonical form contributes its
/// aliases verbatim. Output is sorted, so the canonical description is
/// stable across builds.
pub fn expand_for_indexing(skills: &[String]) -> Vec<String> {
    let base: BTreeSet<String> = skills.iter().map(|s| normalize(s)).collect();
    let expansions = expansion_map();
    let mut expanded = base.clone();
    for skill in &base {
        if let Some(aliases) = expansions.get(skill.as_str()) {
            expanded.extend(aliases.iter().map(|a| (*a).to_string()));
        }
    }
    expanded.into_iter().collect()
}
