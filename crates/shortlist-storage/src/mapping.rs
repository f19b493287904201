//! Row → employee-id mapping, parallel to the index rows.

use std::path::Path;

use serde::{Deserialize, Serialize};

use shortlist_core::errors::{IndexError, ShortlistResult};

use crate::index::FlatIpIndex;

/// Maps each index row to the employee it embeds.
///
/// Identifiers need not be contiguous; every row has exactly one id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowMapping {
    pub ids: Vec<u64>,
}

impl RowMapping {
    pub fn new(ids: Vec<u64>) -> Self {
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolve a search row to an employee id.
    /// `None` for the sentinel row and anything out of range.
    pub fn resolve(&self, row: i64) -> Option<u64> {
        usize::try_from(row).ok().and_then(|i| self.ids.get(i).copied())
    }

    /// Fail fast unless this mapping covers every index row exactly.
    pub fn validate_against(&self, index: &FlatIpIndex) -> ShortlistResult<()> {
        if self.ids.len() != index.rows() {
            return Err(IndexError::RowCountMismatch {
                mapping: self.ids.len(),
                rows: index.rows(),
            }
            .into());
        }
        Ok(())
    }

    /// Write the mapping as a JSON document.
    pub fn save(&self, path: &Path) -> ShortlistResult<()> {
        let raw = serde_json::to_string(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Load a mapping from a JSON document.
    pub fn load(path: &Path) -> ShortlistResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
