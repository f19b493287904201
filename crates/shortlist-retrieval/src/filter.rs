//! Hard constraint filtering with the cold-start relaxation ladder.
//!
//! Years and availability are hard constraints; skills join them only
//! under `SkillPolicy::Hard`. When the strict pass leaves nothing, the
//! ladder loosens constraints stage by stage so a non-empty input pool
//! never filters down to zero.

use std::collections::HashSet;

use tracing::debug;

use shortlist_core::config::{RetrievalConfig, SkillPolicy};
use shortlist_core::lexicon;
use shortlist_core::models::{Availability, EmployeeRecord, ParsedQuery};

/// Which pass of the ladder produced the surviving pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaxationStage {
    /// All hard constraints applied.
    Strict,
    /// Availability dropped, years kept.
    YearsOnly,
    /// Years and availability dropped, skill membership required.
    SkillsOnly,
    /// Everything passed through; soft scoring alone differentiates.
    Unfiltered,
}

/// A pool entry before scoring: raw similarity plus the employee it
/// resolved to.
#[derive(Debug, Clone, Copy)]
pub struct PoolEntry<'a> {
    pub similarity: f32,
    pub employee: &'a EmployeeRecord,
}

pub fn meets_years(employee: &EmployeeRecord, min_years: Option<u32>) -> bool {
    min_years.map_or(true, |min| employee.experience_years >= min)
}

pub fn meets_availability(employee: &EmployeeRecord, required: Option<Availability>) -> bool {
    required.map_or(true, |r| employee.availability == r)
}

/// True when every required skill appears in the employee's normalized
/// skill set.
pub fn has_all_skills(employee: &EmployeeRecord, required: Option<&[String]>) -> bool {
    match required {
        None => true,
        Some(required) => {
            let skills: HashSet<String> =
                employee.skills.iter().map(|s| lexicon::normalize(s)).collect();
            required.iter().all(|r| skills.contains(r))
        }
    }
}

/// The strict pass: years and availability always, skills per policy.
fn passes_strict(employee: &EmployeeRecord, query: &ParsedQuery, policy: SkillPolicy) -> bool {
    meets_years(employee, query.min_years)
        && meets_availability(employee, query.availability)
        && (policy == SkillPolicy::Soft
            || has_all_skills(employee, query.required_skills.as_deref()))
}

/// Apply hard filters, relaxing in stages until the pool is non-empty.
///
/// Returns the surviving pool and the stage that produced it. The result
/// is only empty when the input pool was.
pub fn apply<'a>(
    pool: &[PoolEntry<'a>],
    query: &ParsedQuery,
    config: &RetrievalConfig,
) -> (Vec<PoolEntry<'a>>, RelaxationStage) {
    let strict: Vec<PoolEntry<'a>> = pool
        .iter()
        .filter(|entry| passes_strict(entry.employee, query, config.skill_policy))
        .copied()
        .collect();
    if !strict.is_empty() {
        return (strict, RelaxationStage::Strict);
    }

    debug!(pool = pool.len(), "no strict survivors, relaxing filters");

    let years_only: Vec<PoolEntry<'a>> = pool
        .iter()
        .filter(|entry| meets_years(entry.employee, query.min_years))
        .copied()
        .collect();
    if !years_only.is_empty() {
        return (years_only, RelaxationStage::YearsOnly);
    }

    if config.relax_requires_skills {
        if let Some(required) = query.required_skills.as_deref() {
            let skills_only: Vec<PoolEntry<'a>> = pool
                .iter()
                .filter(|entry| has_all_skills(entry.employee, Some(required)))
                .copied()
                .collect();
            if !skills_only.is_empty() {
                return (skills_only, RelaxationStage::SkillsOnly);
            }
        }
    }

    (pool.to_vec(), RelaxationStage::Unfiltered)
}
