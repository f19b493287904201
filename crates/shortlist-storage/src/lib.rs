//! # shortlist-storage
//!
//! Read-only data plane: the employee catalog, the flat inner-product
//! vector index, and the vector-store persistence format. Everything here
//! is loaded once at startup, validated loudly, and then shared immutably
//! across concurrent queries — no locking needed for reads.

pub mod catalog;
pub mod index;
pub mod mapping;
pub mod vectorstore;

pub use catalog::Catalog;
pub use index::FlatIpIndex;
pub use mapping::RowMapping;
