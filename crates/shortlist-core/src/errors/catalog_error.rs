/// Catalog loading and validation errors. All fatal at startup — a
/// schema violation must never be silently defaulted.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("malformed catalog document: {reason}")]
    Malformed { reason: String },

    #[error("duplicate employee id {id}")]
    DuplicateId { id: u64 },

    #[error("employee {id} failed validation: {reason}")]
    InvalidRecord { id: u64, reason: String },
}
