//! Soft multi-factor boost on top of raw similarity.
//!
//! Factors: skill match, domain-in-projects, years satisfied, availability
//! preference. Each contribution is independent, non-negative, and capped
//! by its weight rule; the final score is similarity + boost, deliberately
//! not renormalized — ranking is relative, not absolute.

use std::collections::HashSet;

use shortlist_core::config::BoostWeights;
use shortlist_core::lexicon;
use shortlist_core::models::{Availability, BoostBreakdown, EmployeeRecord, ParsedQuery};

/// Compute the per-factor boost for one candidate.
pub fn boost(
    employee: &EmployeeRecord,
    query: &ParsedQuery,
    weights: &BoostWeights,
) -> BoostBreakdown {
    let mut breakdown = BoostBreakdown::default();

    // Factor 1: one weight per matched required skill, uncapped total.
    if let Some(required) = query.required_skills.as_deref() {
        let skills: HashSet<String> =
            employee.skills.iter().map(|s| lexicon::normalize(s)).collect();
        let matched = required.iter().filter(|r| skills.contains(*r)).count();
        breakdown.skill = weights.skill * matched as f32;
    }

    // Factor 2: binary — any requested domain inside the project text.
    if let Some(domains) = query.domains.as_deref() {
        let projects = employee.projects.join(" ").to_lowercase();
        if domains.iter().any(|d| projects.contains(d.as_str())) {
            breakdown.domain = weights.domain;
        }
    }

    // Factor 3: binary — experience requirement satisfied.
    if let Some(min) = query.min_years {
        if employee.experience_years >= min {
            breakdown.years = weights.years;
        }
    }

    // Factor 4: sooner availability always scores, constraint or not.
    breakdown.availability = weights.availability
        * f32::from(employee.availability.ordinal())
        / f32::from(Availability::MAX_ORDINAL);

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(skills: &[&str], projects: &[&str], years: u32, availability: Availability) -> EmployeeRecord {
        EmployeeRecord {
            id: 1,
            name: "Test".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            projects: projects.iter().map(|p| p.to_string()).collect(),
            experience_years: years,
            availability,
        }
    }

    fn query(min_years: Option<u32>, skills: Option<&[&str]>, domains: Option<&[&str]>) -> ParsedQuery {
        ParsedQuery {
            min_years,
            availability: None,
            required_skills: skills.map(|s| s.iter().map(|x| x.to_string()).collect()),
            domains: domains.map(|d| d.iter().map(|x| x.to_string()).collect()),
            raw_query: String::new(),
        }
    }

    #[test]
    fn skill_boost_scales_with_match_count() {
        let e = employee(&["k8s", "python", "go"], &[], 1, Availability::Allocated);
        let w = BoostWeights::default();

        let one = boost(&e, &query(None, Some(&["kubernetes"]), None), &w);
        assert!((one.skill - 0.05).abs() < 1e-6);

        let two = boost(&e, &query(None, Some(&["kubernetes", "python"]), None), &w);
        assert!((two.skill - 0.10).abs() < 1e-6);

        let miss = boost(&e, &query(None, Some(&["terraform"]), None), &w);
        assert_eq!(miss.skill, 0.0);
    }

    #[test]
    fn domain_boost_is_binary_not_cumulative() {
        let e = employee(
            &[],
            &["Healthcare claims portal", "healthcare analytics"],
            1,
            Availability::Allocated,
        );
        let w = BoostWeights::default();
        let b = boost(&e, &query(None, None, Some(&["healthcare", "fintech"])), &w);
        assert!((b.domain - 0.10).abs() < 1e-6);
    }

    #[test]
    fn years_boost_is_binary() {
        let w = BoostWeights::default();
        let senior = employee(&[], &[], 8, Availability::Allocated);
        let junior = employee(&[], &[], 2, Availability::Allocated);
        assert!((boost(&senior, &query(Some(5), None, None), &w).years - 0.10).abs() < 1e-6);
        assert_eq!(boost(&junior, &query(Some(5), None, None), &w).years, 0.0);
    }

    #[test]
    fn availability_scales_with_ordinal_even_unconstrained() {
        let w = BoostWeights::default();
        let q = query(None, None, None);

        let now = boost(&employee(&[], &[], 0, Availability::Available), &q, &w);
        assert!((now.availability - 0.05).abs() < 1e-6);

        let soon = boost(&employee(&[], &[], 0, Availability::TwoWeeks), &q, &w);
        assert!((soon.availability - 0.05 * 2.0 / 3.0).abs() < 1e-6);

        let parked = boost(&employee(&[], &[], 0, Availability::Allocated), &q, &w);
        assert_eq!(parked.availability, 0.0);
    }

    #[test]
    fn contributions_are_non_negative_and_additive() {
        let e = employee(
            &["k8s"],
            &["fintech ledger"],
            6,
            Availability::Available,
        );
        let w = BoostWeights::default();
        let b = boost(
            &e,
            &query(Some(3), Some(&["kubernetes"]), Some(&["fintech"])),
            &w,
        );
        assert!(b.skill >= 0.0 && b.domain >= 0.0 && b.years >= 0.0 && b.availability >= 0.0);
        assert!((b.total() - (b.skill + b.domain + b.years + b.availability)).abs() < 1e-6);
        assert!((b.total() - 0.30).abs() < 1e-6);
    }

    #[test]
    fn removing_a_satisfied_constraint_never_raises_boost() {
        let e = employee(&["k8s"], &["fintech ledger"], 6, Availability::Available);
        let w = BoostWeights::default();
        let full = boost(
            &e,
            &query(Some(3), Some(&["kubernetes"]), Some(&["fintech"])),
            &w,
        );
        let without_skills = boost(&e, &query(Some(3), None, Some(&["fintech"])), &w);
        let without_years = boost(&e, &query(None, Some(&["kubernetes"]), Some(&["fintech"])), &w);
        assert!(without_skills.total() <= full.total());
        assert!(without_years.total() <= full.total());
    }
}
