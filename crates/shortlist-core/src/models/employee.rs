//! Roster records and the availability scale.

use serde::{Deserialize, Serialize};

/// How soon an employee can join a new engagement.
///
/// The ordinal rank orders variants by readiness — sooner is higher — and
/// drives both the availability boost and the final tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    #[serde(rename = "2_weeks")]
    TwoWeeks,
    #[serde(rename = "1_month")]
    OneMonth,
    Allocated,
}

impl Availability {
    /// The highest readiness rank on the scale.
    pub const MAX_ORDINAL: u8 = 3;

    /// Readiness rank: `available`=3, `2_weeks`=2, `1_month`=1, `allocated`=0.
    pub fn ordinal(self) -> u8 {
        match self {
            Availability::Available => 3,
            Availability::TwoWeeks => 2,
            Availability::OneMonth => 1,
            Availability::Allocated => 0,
        }
    }

    /// Wire value, matching the catalog JSON representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::TwoWeeks => "2_weeks",
            Availability::OneMonth => "1_month",
            Availability::Allocated => "allocated",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single roster entry.
///
/// Immutable for the lifetime of a query; the catalog owns one per
/// employee, keyed by `id`. Skills are stored as entered — normalization
/// happens at match time, never at rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Stable unique identifier.
    pub id: u64,
    pub name: String,
    /// Free-form skill tokens.
    pub skills: Vec<String>,
    /// Free-form project descriptions.
    pub projects: Vec<String>,
    /// Whole years of experience.
    pub experience_years: u32,
    pub availability: Availability,
}
