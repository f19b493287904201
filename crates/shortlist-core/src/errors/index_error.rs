/// Vector index and row-mapping errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("row mapping has {mapping} entries but index has {rows} rows")]
    RowCountMismatch { mapping: usize, rows: usize },

    #[error("dimension mismatch: index is {expected}, vector is {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("malformed index file: {reason}")]
    MalformedFile { reason: String },
}
