// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sparse vectors and CSR matrices with their invariants checked up front.
//!
//! A `CsrMatrix` can only be obtained through [`CsrMatrix::new`] or by
//! deserialising one, and both paths run the same validation. After that,
//! row access never needs bounds or ordering checks: columns are in range,
//! strictly increasing within each row, and every stored value is finite.
//! Row norms are computed once here so the ranking scan never recomputes them.
//!
//! # Wire format
//!
//! ```json
//! { "shape": [2, 5], "indptr": [0, 2, 3], "indices": [0, 3, 1], "data": [0.6, 0.8, 1.0] }
//! ```
//!
//! This is the usual compressed-sparse-row triple: row `i` owns
//! `indices[indptr[i]..indptr[i + 1]]` and the matching slice of `data`.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::InvariantError;

/// A vector of fixed dimensionality storing only its non-zero entries.
///
/// Entries are sorted by column with no duplicates and no explicit zeros,
/// so `nnz() == 0` is exactly the zero vector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseVector {
    dimension: usize,
    indices: Vec<u32>,
    values: Vec<f64>,
}

impl SparseVector {
    /// The zero vector of the given dimensionality.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            dimension,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Build from `(column, value)` pairs in any order.
    ///
    /// Repeated columns are summed; entries that end up zero are dropped.
    pub fn from_entries(dimension: usize, entries: impl IntoIterator<Item = (u32, f64)>) -> Self {
        let mut merged: BTreeMap<u32, f64> = BTreeMap::new();
        for (column, value) in entries {
            debug_assert!(
                (column as usize) < dimension,
                "column {} out of range for dimension {}",
                column,
                dimension
            );
            *merged.entry(column).or_insert(0.0) += value;
        }

        let (indices, values) = merged.into_iter().filter(|&(_, v)| v != 0.0).unzip();
        Self {
            dimension,
            indices,
            values,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices
            .iter()
            .zip(&self.values)
            .map(|(&c, &v)| (c as usize, v))
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        l2_norm(&self.values)
    }

    /// Multiply every entry by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.values {
            *v *= factor;
        }
    }

    /// Dot product with one matrix row.
    pub fn dot(&self, row: RowView<'_>) -> f64 {
        sparse_dot(&self.indices, &self.values, row.indices, row.values)
    }

    /// Borrow this vector as if it were a matrix row.
    pub fn as_row(&self) -> RowView<'_> {
        RowView {
            indices: &self.indices,
            values: &self.values,
        }
    }
}

/// Borrowed view of one CSR row (or of a `SparseVector`).
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    pub indices: &'a [u32],
    pub values: &'a [f64],
}

impl RowView<'_> {
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn norm(&self) -> f64 {
        l2_norm(self.values)
    }
}

fn l2_norm(values: &[f64]) -> f64 {
    values.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Merge-join dot product of two column-sorted sparse slices.
fn sparse_dot(a_idx: &[u32], a_val: &[f64], b_idx: &[u32], b_val: &[f64]) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a_idx.len() && j < b_idx.len() {
        match a_idx[i].cmp(&b_idx[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                sum += a_val[i] * b_val[j];
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

/// Compressed sparse row matrix, `rows × cols`, validated on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CsrParts", into = "CsrParts")]
pub struct CsrMatrix {
    rows: usize,
    cols: usize,
    indptr: Vec<usize>,
    indices: Vec<u32>,
    data: Vec<f64>,
    row_norms: Vec<f64>,
}

/// Serialized shape of a `CsrMatrix`.
#[derive(Serialize, Deserialize)]
struct CsrParts {
    shape: (usize, usize),
    indptr: Vec<usize>,
    indices: Vec<u32>,
    data: Vec<f64>,
}

impl TryFrom<CsrParts> for CsrMatrix {
    type Error = InvariantError;

    fn try_from(parts: CsrParts) -> Result<Self, Self::Error> {
        let (rows, cols) = parts.shape;
        CsrMatrix::new(rows, cols, parts.indptr, parts.indices, parts.data)
    }
}

impl From<CsrMatrix> for CsrParts {
    fn from(m: CsrMatrix) -> Self {
        CsrParts {
            shape: (m.rows, m.cols),
            indptr: m.indptr,
            indices: m.indices,
            data: m.data,
        }
    }
}

impl CsrMatrix {
    /// Validate raw CSR arrays and take ownership of them.
    pub fn new(
        rows: usize,
        cols: usize,
        indptr: Vec<usize>,
        indices: Vec<u32>,
        data: Vec<f64>,
    ) -> Result<Self, InvariantError> {
        if indptr.len() != rows + 1 {
            return Err(InvariantError::IndptrLength {
                len: indptr.len(),
                expected: rows + 1,
            });
        }
        if indices.len() != data.len() {
            return Err(InvariantError::DataLengthMismatch {
                indices: indices.len(),
                data: data.len(),
            });
        }
        let first = indptr[0];
        let last = indptr[rows];
        if first != 0 || last != data.len() {
            return Err(InvariantError::IndptrBounds {
                first,
                last,
                nnz: data.len(),
            });
        }

        // Monotone with last == nnz bounds every row slice
        if let Some(row) = indptr.windows(2).position(|w| w[1] < w[0]) {
            return Err(InvariantError::IndptrNotMonotonic { row });
        }

        for row in 0..rows {
            let (start, end) = (indptr[row], indptr[row + 1]);
            for pos in start..end {
                let column = indices[pos] as usize;
                if column >= cols {
                    return Err(InvariantError::ColumnOutOfBounds { row, column, cols });
                }
                if pos > start && indices[pos - 1] >= indices[pos] {
                    return Err(InvariantError::UnsortedRow {
                        row,
                        position: pos - start,
                    });
                }
                if !data[pos].is_finite() {
                    return Err(InvariantError::NonFiniteValue { row, column });
                }
            }
        }

        let row_norms = (0..rows)
            .map(|r| l2_norm(&data[indptr[r]..indptr[r + 1]]))
            .collect();

        Ok(Self {
            rows,
            cols,
            indptr,
            indices,
            data,
            row_norms,
        })
    }

    /// Stack sparse vectors as rows of a `rows.len() × cols` matrix.
    pub fn from_rows(cols: usize, rows: &[SparseVector]) -> Result<Self, InvariantError> {
        let mut indptr = Vec::with_capacity(rows.len() + 1);
        let mut indices = Vec::new();
        let mut data = Vec::new();
        indptr.push(0);
        for row in rows {
            indices.extend_from_slice(row.indices());
            data.extend_from_slice(row.values());
            indptr.push(indices.len());
        }
        Self::new(rows.len(), cols, indptr, indices, data)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored values.
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Fraction of cells that are stored. Zero for an empty shape.
    pub fn density(&self) -> f64 {
        let cells = self.rows * self.cols;
        if cells == 0 {
            0.0
        } else {
            self.nnz() as f64 / cells as f64
        }
    }

    /// Row `i`. Panics if `i >= rows()`.
    pub fn row(&self, i: usize) -> RowView<'_> {
        let (start, end) = (self.indptr[i], self.indptr[i + 1]);
        RowView {
            indices: &self.indices[start..end],
            values: &self.data[start..end],
        }
    }

    /// Precomputed Euclidean norm of every row.
    pub fn row_norms(&self) -> &[f64] {
        &self.row_norms
    }
}
