//! Employee catalog: load, validate, O(1) lookup by id.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use shortlist_core::constants::DESCRIPTION_SEPARATOR;
use shortlist_core::errors::{CatalogError, ShortlistResult};
use shortlist_core::lexicon;
use shortlist_core::models::EmployeeRecord;

/// On-disk catalog document shape.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    employees: Vec<EmployeeRecord>,
}

/// The read-only roster, keyed by employee id.
///
/// Built once at startup; queries share it by reference and never mutate
/// it. Lookup by id is a map access, not a list scan.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: HashMap<u64, EmployeeRecord>,
}

impl Catalog {
    /// Build a catalog from records, validating as it goes.
    /// Duplicate ids and empty names abort the load.
    pub fn from_records(records: Vec<EmployeeRecord>) -> ShortlistResult<Self> {
        let mut map = HashMap::with_capacity(records.len());
        for record in records {
            if record.name.trim().is_empty() {
                return Err(CatalogError::InvalidRecord {
                    id: record.id,
                    reason: "empty name".to_string(),
                }
                .into());
            }
            let id = record.id;
            if map.insert(id, record).is_some() {
                return Err(CatalogError::DuplicateId { id }.into());
            }
        }
        Ok(Self { records: map })
    }

    /// Parse and validate a JSON catalog document.
    /// Schema violations fail loudly — nothing is silently defaulted.
    pub fn from_json_str(raw: &str) -> ShortlistResult<Self> {
        let doc: CatalogDocument =
            serde_json::from_str(raw).map_err(|e| CatalogError::Malformed {
                reason: e.to_string(),
            })?;
        Self::from_records(doc.employees)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load(path: &Path) -> ShortlistResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            employees = catalog.len(),
            path = %path.display(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn get(&self, id: u64) -> Option<&EmployeeRecord> {
        self.records.get(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &EmployeeRecord> {
        self.records.values()
    }

    /// Ids sorted ascending — the deterministic row order for index builds.
    pub fn sorted_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.records.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Canonical one-line description embedded for each employee.
///
/// Skills are normalized and alias-expanded so the index matches whichever
/// abbreviation a query uses. The field order and separator are fixed:
/// similarity reflects overlap with this text, not the raw skill list.
pub fn describe(record: &EmployeeRecord) -> String {
    let skills = lexicon::expand_for_indexing(&record.skills).join(", ");
    let projects = record.projects.join(", ");
    format!(
        "{name}{sep}{years} years{sep}skills: {skills}{sep}projects: {projects}{sep}availability: {availability}",
        name = record.name,
        sep = DESCRIPTION_SEPARATOR,
        years = record.experience_years,
        skills = skills,
        projects = projects,
        availability = record.availability,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortlist_core::models::Availability;

    fn record(id: u64, name: &str) -> EmployeeRecord {
        EmployeeRecord {
            id,
            name: name.to_string(),
            skills: vec!["k8s".to_string(), "python".to_string()],
            projects: vec!["healthcare claims portal".to_string()],
            experience_years: 5,
            availability: Availability::Available,
        }
    }

    #[test]
    fn loads_valid_document() {
        let raw = r#"{
            "employees": [
                {
                    "id": 1,
                    "name": "Asha Rao",
                    "skills": ["python", "aws"],
                    "projects": ["fintech ledger"],
                    "experience_years": 4,
                    "availability": "2_weeks"
                }
            ]
        }"#;
        let catalog = Catalog::from_json_str(raw).unwrap();
        assert_eq!(catalog.len(), 1);
        let asha = catalog.get(1).unwrap();
        assert_eq!(asha.availability, Availability::TwoWeeks);
    }

    #[test]
    fn missing_field_fails_loudly() {
        let raw = r#"{"employees": [{"id": 1, "name": "No Skills"}]}"#;
        assert!(Catalog::from_json_str(raw).is_err());
    }

    #[test]
    fn duplicate_id_aborts_load() {
        let err = Catalog::from_records(vec![record(3, "A"), record(3, "B")]).unwrap_err();
        assert!(err.to_string().contains("duplicate employee id 3"));
    }

    #[test]
    fn empty_name_aborts_load() {
        assert!(Catalog::from_records(vec![record(1, "  ")]).is_err());
    }

    #[test]
    fn sorted_ids_are_ascending() {
        let catalog =
            Catalog::from_records(vec![record(9, "A"), record(2, "B"), record(5, "C")]).unwrap();
        assert_eq!(catalog.sorted_ids(), vec![2, 5, 9]);
    }

    #[test]
    fn describe_expands_aliases_and_keeps_field_order() {
        let text = describe(&record(1, "Asha Rao"));
        assert!(text.starts_with("Asha Rao | 5 years | skills: "));
        assert!(text.contains("k8s"));
        assert!(text.contains("kubernetes"));
        assert!(text.contains("projects: healthcare claims portal"));
        assert!(text.ends_with("availability: available"));
    }
}
