//! Scored shortlist entries and the per-factor boost breakdown.

use serde::{Deserialize, Serialize};

use super::employee::{Availability, EmployeeRecord};

/// Additive soft-boost contributions, one per scoring factor.
///
/// Each contribution is non-negative and independently bounded by its
/// weight rule; `total()` is the boost added on top of raw similarity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoostBreakdown {
    /// Weight × matched required-skill count (uncapped total).
    pub skill: f32,
    /// Weight once, if any requested domain appears in the projects.
    pub domain: f32,
    /// Weight once, if the experience requirement is satisfied.
    pub years: f32,
    /// Weight scaled by availability ordinal / max ordinal.
    pub availability: f32,
}

impl BoostBreakdown {
    /// Sum of all contributions.
    pub fn total(&self) -> f32 {
        self.skill + self.domain + self.years + self.availability
    }
}

/// One ranked result.
///
/// Carries a display snapshot of the employee as of lookup time plus the
/// score components. `match_score = similarity + boost`, deliberately not
/// renormalized — ranking is relative, not absolute. The `similarity` and
/// `boost` fields are the debug view of the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub id: u64,
    pub name: String,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub projects: Vec<String>,
    pub availability: Availability,
    /// Final score used for ranking.
    pub match_score: f32,
    /// Raw cosine similarity from the vector index.
    pub similarity: f32,
    /// Soft boost total.
    pub boost: f32,
}

impl ScoredCandidate {
    /// Snapshot an employee's display fields with its score components.
    pub fn new(employee: &EmployeeRecord, similarity: f32, boost: f32) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            skills: employee.skills.clone(),
            experience_years: employee.experience_years,
            projects: employee.projects.clone(),
            availability: employee.availability,
            match_score: similarity + boost,
            similarity,
            boost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> EmployeeRecord {
        EmployeeRecord {
            id: 7,
            name: "Priya Nair".to_string(),
            skills: vec!["python".to_string(), "k8s".to_string()],
            projects: vec!["fintech fraud scoring".to_string()],
            experience_years: 6,
            availability: Availability::TwoWeeks,
        }
    }

    #[test]
    fn snapshot_copies_display_fields() {
        let c = ScoredCandidate::new(&employee(), 0.8, 0.15);
        assert_eq!(c.id, 7);
        assert_eq!(c.name, "Priya Nair");
        assert_eq!(c.availability, Availability::TwoWeeks);
        assert!((c.match_score - 0.95).abs() < 1e-6);
    }

    #[test]
    fn breakdown_total_is_sum() {
        let b = BoostBreakdown {
            skill: 0.10,
            domain: 0.10,
            years: 0.10,
            availability: 0.05,
        };
        assert!((b.total() - 0.35).abs() < 1e-6);
        assert_eq!(BoostBreakdown::default().total(), 0.0);
    }
}
