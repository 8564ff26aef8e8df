// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Three layers, kept apart so callers can tell them apart:
//!
//! | Type             | Raised by                  | Meaning                          |
//! |------------------|----------------------------|----------------------------------|
//! | `SearchError`    | `search`, `rank`, `TopK`   | the request was bad              |
//! | `InvariantError` | corpus/matrix/model checks | the artifact is structurally bad |
//! | `LoadError`      | `loader`                   | the artifact could not be loaded |
//!
//! A query with no vocabulary overlap is not an error anywhere: it scores 0.0
//! against every document.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Domain;

/// Failures a single search request can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Domain selector is neither `health` nor `education`.
    #[error("unknown domain '{0}' (expected 'health' or 'education')")]
    UnknownDomain(String),
    /// `top_k` was zero or negative.
    #[error("top_k must be a positive integer, got {0}")]
    InvalidTopK(i64),
    /// Query vector and matrix live in different term spaces.
    #[error("query vector has dimension {query} but the term matrix has {matrix} columns")]
    DimensionMismatch { query: usize, matrix: usize },
}

/// Structural problems in a term model, term matrix, or their pairing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// Matrix row count differs from the document table length.
    #[error("term matrix has {rows} rows but the corpus has {documents} documents")]
    RowCountMismatch { rows: usize, documents: usize },
    /// Matrix column count differs from the model dimensionality.
    #[error("term matrix has {matrix} columns but the term model has dimension {model}")]
    ColumnCountMismatch { matrix: usize, model: usize },
    /// `indptr` must hold exactly `rows + 1` offsets.
    #[error("indptr has {len} entries, expected rows + 1 = {expected}")]
    IndptrLength { len: usize, expected: usize },
    /// `indptr` must start at 0 and end at the number of stored values.
    #[error("indptr spans {first}..{last} but {nnz} values are stored")]
    IndptrBounds { first: usize, last: usize, nnz: usize },
    /// `indptr` went backwards.
    #[error("indptr decreases at row {row}")]
    IndptrNotMonotonic { row: usize },
    /// `indices` and `data` must be parallel arrays.
    #[error("indices has {indices} entries but data has {data}")]
    DataLengthMismatch { indices: usize, data: usize },
    /// A stored column is outside the matrix.
    #[error("row {row} stores column {column} but the matrix has {cols} columns")]
    ColumnOutOfBounds { row: usize, column: usize, cols: usize },
    /// Columns within a row must be strictly increasing.
    #[error("row {row} has unsorted or duplicate columns at position {position}")]
    UnsortedRow { row: usize, position: usize },
    /// NaN or infinity stored in the matrix.
    #[error("row {row} stores a non-finite value at column {column}")]
    NonFiniteValue { row: usize, column: usize },
    /// A vocabulary term points outside the model dimensionality.
    #[error("vocabulary term '{term}' maps to column {column} but the dimension is {dimension}")]
    VocabularyOutOfBounds {
        term: String,
        column: usize,
        dimension: usize,
    },
    /// Two vocabulary terms share a column.
    #[error("vocabulary maps more than one term to column {column}")]
    DuplicateVocabularyColumn { column: usize },
    /// The idf vector length must equal the dimension.
    #[error("idf has {len} weights but the dimension is {dimension}")]
    IdfLength { len: usize, dimension: usize },
    /// NaN or infinity in the idf vector.
    #[error("idf weight for column {column} is not finite")]
    NonFiniteIdf { column: usize },
    /// n-gram range must satisfy `1 <= min <= max`.
    #[error("invalid ngram range ({min}, {max})")]
    InvalidNgramRange { min: usize, max: usize },
    /// The model strips accents but this build has no Unicode decomposition.
    #[error("term model strips accents but the unicode-normalization feature is disabled")]
    AccentStrippingUnavailable,
}

/// Failures while reading corpus artifacts from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("checksum mismatch for {}: expected {expected:08x}, got {actual:08x}", path.display())]
    Checksum {
        path: PathBuf,
        expected: u32,
        actual: u32,
    },
    #[error("unsupported manifest version {0} (expected 1)")]
    UnsupportedVersion(u32),
    #[error("manifest has no corpus for domain '{0}'")]
    MissingDomain(Domain),
    #[error("corpus '{domain}' is malformed: {source}")]
    Invariant {
        domain: Domain,
        #[source]
        source: InvariantError,
    },
}
