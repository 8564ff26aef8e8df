// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cosine scoring of a query vector against every row of a term matrix.
//!
//! ```text
//! score_i = dot(q, row_i) / (‖q‖ · ‖row_i‖)      and 0.0 if either norm is 0
//! ```
//!
//! Row norms come precomputed from the matrix. The zero-norm convention is
//! what turns an out-of-vocabulary query into "every document scores 0.0"
//! instead of a division by zero.

use crate::sparse::{CsrMatrix, RowView, SparseVector};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Corpora with fewer rows than this are scored on the calling thread even
/// with the `parallel` feature; thread handoff costs more than the scan.
pub const PARALLEL_THRESHOLD: usize = 512;

/// Cosine similarity of `query` and one matrix row, given both norms.
///
/// Clamped to `[-1, 1]` so floating-point overshoot on near-identical vectors
/// never reports 1.0000000000000002.
#[inline]
pub fn cosine_similarity(query: &SparseVector, query_norm: f64, row: RowView<'_>, row_norm: f64) -> f64 {
    if query_norm == 0.0 || row_norm == 0.0 {
        return 0.0;
    }
    (query.dot(row) / (query_norm * row_norm)).clamp(-1.0, 1.0)
}

/// Score every row on the calling thread.
pub fn score_all_sequential(query: &SparseVector, matrix: &CsrMatrix) -> Vec<f64> {
    let query_norm = query.norm();
    let norms = matrix.row_norms();
    (0..matrix.rows())
        .map(|i| cosine_similarity(query, query_norm, matrix.row(i), norms[i]))
        .collect()
}

/// Score every row across the rayon pool. Same output as the sequential scan.
#[cfg(feature = "parallel")]
pub fn score_all_parallel(query: &SparseVector, matrix: &CsrMatrix) -> Vec<f64> {
    let query_norm = query.norm();
    let norms = matrix.row_norms();
    (0..matrix.rows())
        .into_par_iter()
        .map(|i| cosine_similarity(query, query_norm, matrix.row(i), norms[i]))
        .collect()
}

/// Score every row, in row order.
pub fn score_all(query: &SparseVector, matrix: &CsrMatrix) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        if matrix.rows() >= PARALLEL_THRESHOLD {
            return score_all_parallel(query, matrix);
        }
    }
    score_all_sequential(query, matrix)
}
