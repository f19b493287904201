//! Flat inner-product index over unit-normalized embeddings.
//!
//! Exact search: score every row, sort descending, pad to `k` with the
//! sentinel row so callers see the same contract as an ANN backend.
//! Inner product equals cosine similarity on unit vectors.

use shortlist_core::constants::NO_ROW;
use shortlist_core::errors::{IndexError, ShortlistResult};

/// Dense row-major matrix of unit vectors with exact top-k search.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatIpIndex {
    dims: usize,
    data: Vec<f32>,
}

impl FlatIpIndex {
    /// An empty index for `dims`-dimensional vectors.
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            data: Vec::new(),
        }
    }

    /// Rebuild an index from raw row-major data (the persistence path).
    pub fn from_parts(dims: usize, data: Vec<f32>) -> ShortlistResult<Self> {
        if dims == 0 || data.len() % dims != 0 {
            return Err(IndexError::MalformedFile {
                reason: format!("{} values do not tile {dims}-dim rows", data.len()),
            }
            .into());
        }
        Ok(Self { dims, data })
    }

    /// Append one vector as the next row.
    pub fn add(&mut self, vector: &[f32]) -> ShortlistResult<()> {
        if vector.len() != self.dims {
            return Err(IndexError::DimensionMismatch {
                expected: self.dims,
                actual: vector.len(),
            }
            .into());
        }
        self.data.extend_from_slice(vector);
        Ok(())
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn rows(&self) -> usize {
        if self.dims == 0 {
            0
        } else {
            self.data.len() / self.dims
        }
    }

    /// Raw row-major data, exposed for persistence.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Exact top-k search by inner product.
    ///
    /// Returns exactly `k` entries sorted by similarity descending, ties
    /// broken by ascending row. When fewer than `k` rows exist the tail is
    /// padded with `(f32::NEG_INFINITY, NO_ROW)` — callers filter the
    /// sentinel, the index never does.
    pub fn search(&self, query: &[f32], k: usize) -> ShortlistResult<Vec<(f32, i64)>> {
        if query.len() != self.dims {
            return Err(IndexError::DimensionMismatch {
                expected: self.dims,
                actual: query.len(),
            }
            .into());
        }

        let mut scored: Vec<(f32, i64)> = (0..self.rows())
            .map(|row| {
                let start = row * self.dims;
                let vector = &self.data[start..start + self.dims];
                let dot: f32 = vector.iter().zip(query).map(|(a, b)| a * b).sum();
                (dot, row as i64)
            })
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.cmp(&b.1))
        });
        scored.truncate(k);
        while scored.len() < k {
            scored.push((f32::NEG_INFINITY, NO_ROW));
        }

        Ok(scored)
    }
}
