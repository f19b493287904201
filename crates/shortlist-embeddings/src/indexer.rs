//! Catalog → vector index build.
//!
//! Row order is ids ascending, so identical catalogs always produce
//! identical indexes. Each record embeds its alias-expanded canonical
//! description; embedding runs on the rayon pool.

use rayon::prelude::*;
use tracing::info;

use shortlist_core::errors::ShortlistResult;
use shortlist_core::traits::IEmbeddingProvider;
use shortlist_storage::catalog::describe;
use shortlist_storage::{Catalog, FlatIpIndex, RowMapping};

/// Build the vector index and row mapping for a catalog.
pub fn build_index(
    catalog: &Catalog,
    provider: &dyn IEmbeddingProvider,
) -> ShortlistResult<(FlatIpIndex, RowMapping)> {
    let mut records: Vec<_> = catalog.iter().collect();
    records.sort_by_key(|r| r.id);

    let texts: Vec<String> = records.iter().map(|r| describe(r)).collect();
    let vectors: Vec<ShortlistResult<Vec<f32>>> =
        texts.par_iter().map(|text| provider.embed(text)).collect();

    let mut index = FlatIpIndex::new(provider.dimensions());
    for vector in vectors {
        index.add(&unit_normalize(vector?))?;
    }

    let mapping = RowMapping::new(records.iter().map(|r| r.id).collect());
    mapping.validate_against(&index)?;

    info!(
        rows = index.rows(),
        dims = index.dims(),
        provider = provider.name(),
        "vector index built"
    );
    Ok((index, mapping))
}

/// Scale a vector to unit length. Zero vectors pass through unchanged.
fn unit_normalize(mut vector: Vec<f32>) -> Vec<f32> {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for value in &mut vector {
            *value /= norm;
        }
    }
    vector
}
