//! Domain models shared across the workspace.

mod candidate;
mod employee;
mod parsed_query;

pub use candidate::{BoostBreakdown, ScoredCandidate};
pub use employee::{Availability, EmployeeRecord};
pub use parsed_query::ParsedQuery;
