// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored documents get sorted and cut.
//!
//! Sort order is score descending, then document index ascending. The index
//! tiebreaker makes the order total, so two documents with identical vectors
//! always come back lowest-index first, and a query that matches nothing
//! returns the first `k` documents of the table in order.

use std::cmp::Ordering;
use std::num::NonZeroUsize;

use crate::contracts::{check_ranked_order, check_scores_in_range, check_top_k_bound};
use crate::error::SearchError;
use crate::scoring::score_all;
use crate::sparse::{CsrMatrix, SparseVector};
use crate::types::RankedEntry;

/// Results returned when the caller does not say how many.
pub const DEFAULT_TOP_K: usize = 3;

/// A validated, strictly positive result count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopK(NonZeroUsize);

impl TopK {
    /// Accepts any positive count. Zero and negatives are `InvalidTopK`;
    /// there is no clamping.
    pub fn new(k: i64) -> Result<Self, SearchError> {
        usize::try_from(k)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(TopK)
            .ok_or(SearchError::InvalidTopK(k))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for TopK {
    fn default() -> Self {
        TopK(NonZeroUsize::new(DEFAULT_TOP_K).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<i64> for TopK {
    type Error = SearchError;

    fn try_from(k: i64) -> Result<Self, Self::Error> {
        TopK::new(k)
    }
}

/// Compare two ranked entries.
///
/// 1. **Score** descending
/// 2. **Index** ascending, for absolute determinism
///
/// Scores are finite (matrix and model are validated at load), so
/// `total_cmp` agrees with numeric order.
pub fn compare_entries(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.index.cmp(&b.index))
}

/// The best `min(k, scores.len())` entries, best first.
///
/// Partially selects the top `k` before sorting them, so a small `k` over a
/// large corpus sorts only `k` entries.
pub fn select_top_k(scores: &[f64], k: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = scores
        .iter()
        .enumerate()
        .map(|(index, &score)| RankedEntry { index, score })
        .collect();

    let k = k.min(entries.len());
    if k == 0 {
        return Vec::new();
    }
    if k < entries.len() {
        entries.select_nth_unstable_by(k - 1, compare_entries);
        entries.truncate(k);
    }
    entries.sort_unstable_by(compare_entries);
    entries
}

/// Rank every row of `matrix` against `query` and keep the best `top_k`.
pub fn rank(
    query: &SparseVector,
    matrix: &CsrMatrix,
    top_k: TopK,
) -> Result<Vec<RankedEntry>, SearchError> {
    if query.dimension() != matrix.cols() {
        return Err(SearchError::DimensionMismatch {
            query: query.dimension(),
            matrix: matrix.cols(),
        });
    }

    let scores = score_all(query, matrix);
    let ranked = select_top_k(&scores, top_k.get());

    check_top_k_bound(ranked.len(), top_k.get(), matrix.rows());
    check_ranked_order(&ranked);
    check_scores_in_range(&ranked);

    Ok(ranked)
}
