// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query vectorizer: free text into the corpus term space.
//!
//! A `TermModel` is a fitted TF-IDF transform loaded from an artifact. It is
//! never fitted here. Transforming text runs the same pipeline the offline
//! fit used for the document rows, so a query vector and a matrix row are
//! directly comparable:
//!
//! ```text
//! text → lowercase? → strip accents? → tokenize → drop stop words
//!      → n-grams → vocabulary lookup → tf (raw or 1 + ln tf) × idf → norm
//! ```
//!
//! Terms outside the vocabulary are ignored. A query with no overlap comes out
//! as the zero vector, which the ranker scores as 0.0 against everything.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::InvariantError;
use crate::sparse::SparseVector;
use crate::utils::{normalize, strip_accents, tokenize};

/// Output normalisation applied to every transformed vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// Unit Euclidean length.
    #[default]
    L2,
    /// Absolute values sum to one.
    L1,
    /// Raw weights.
    None,
}

/// Preprocessing and weighting options captured when the model was fitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TermModelConfig {
    pub lowercase: bool,
    pub strip_accents: bool,
    /// Shortest token kept, in characters.
    pub min_token_length: usize,
    /// Compared against tokens after lowercasing/accent stripping.
    pub stop_words: Vec<String>,
    /// Inclusive word n-gram range.
    pub ngram_range: (usize, usize),
    /// Replace tf with `1 + ln(tf)`.
    pub sublinear_tf: bool,
    pub norm: Norm,
}

impl Default for TermModelConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            strip_accents: false,
            min_token_length: 2,
            stop_words: Vec::new(),
            ngram_range: (1, 1),
            sublinear_tf: false,
            norm: Norm::L2,
        }
    }
}

/// Fitted term-weighting model for one corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TermModelParts", into = "TermModelParts")]
pub struct TermModel {
    dimension: usize,
    vocabulary: HashMap<String, u32>,
    idf: Option<Vec<f64>>,
    config: TermModelConfig,
    stop_words: HashSet<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TermModelParts {
    dimension: usize,
    vocabulary: BTreeMap<String, u32>,
    #[serde(default)]
    idf: Option<Vec<f64>>,
    #[serde(default)]
    config: TermModelConfig,
}

impl TryFrom<TermModelParts> for TermModel {
    type Error = InvariantError;

    fn try_from(parts: TermModelParts) -> Result<Self, Self::Error> {
        TermModel::new(
            parts.dimension,
            parts.vocabulary.into_iter().collect(),
            parts.idf,
            parts.config,
        )
    }
}

impl From<TermModel> for TermModelParts {
    fn from(model: TermModel) -> Self {
        TermModelParts {
            dimension: model.dimension,
            vocabulary: model.vocabulary.into_iter().collect(),
            idf: model.idf,
            config: model.config,
        }
    }
}

impl TermModel {
    /// Validate and assemble a model.
    ///
    /// Every vocabulary column must be below `dimension` and used once; `idf`,
    /// when present, needs exactly `dimension` finite weights. A model that
    /// strips accents needs the `unicode-normalization` feature.
    pub fn new(
        dimension: usize,
        vocabulary: HashMap<String, u32>,
        idf: Option<Vec<f64>>,
        config: TermModelConfig,
    ) -> Result<Self, InvariantError> {
        let (min_n, max_n) = config.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(InvariantError::InvalidNgramRange {
                min: min_n,
                max: max_n,
            });
        }

        if config.strip_accents && !cfg!(feature = "unicode-normalization") {
            return Err(InvariantError::AccentStrippingUnavailable);
        }

        let mut seen = vec![false; dimension];
        for (term, &column) in &vocabulary {
            let column = column as usize;
            if column >= dimension {
                return Err(InvariantError::VocabularyOutOfBounds {
                    term: term.clone(),
                    column,
                    dimension,
                });
            }
            if std::mem::replace(&mut seen[column], true) {
                return Err(InvariantError::DuplicateVocabularyColumn { column });
            }
        }

        if let Some(weights) = &idf {
            if weights.len() != dimension {
                return Err(InvariantError::IdfLength {
                    len: weights.len(),
                    dimension,
                });
            }
            if let Some(column) = weights.iter().position(|w| !w.is_finite()) {
                return Err(InvariantError::NonFiniteIdf { column });
            }
        }

        let stop_words = config.stop_words.iter().cloned().collect();
        Ok(Self {
            dimension,
            vocabulary,
            idf,
            config,
            stop_words,
        })
    }

    /// Width `D` of every vector this model produces.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Column of a vocabulary term, if it has one.
    pub fn column(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).map(|&c| c as usize)
    }

    pub fn idf(&self) -> Option<&[f64]> {
        self.idf.as_deref()
    }

    pub fn config(&self) -> &TermModelConfig {
        &self.config
    }

    /// Transform text into a sparse `D`-dimensional vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut prepared = if self.config.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        if self.config.strip_accents {
            prepared = strip_accents(&prepared);
        }

        let tokens: Vec<&str> = tokenize(&prepared, self.config.min_token_length)
            .into_iter()
            .filter(|t| !self.stop_words.contains(*t))
            .collect();

        let mut counts: HashMap<u32, f64> = HashMap::new();
        let (min_n, max_n) = self.config.ngram_range;
        for n in min_n..=max_n {
            for window in tokens.windows(n) {
                let gram: Cow<'_, str> = if n == 1 {
                    Cow::Borrowed(window[0])
                } else {
                    Cow::Owned(window.join(" "))
                };
                if let Some(&column) = self.vocabulary.get(gram.as_ref()) {
                    *counts.entry(column).or_insert(0.0) += 1.0;
                }
            }
        }

        let weighted = counts.into_iter().map(|(column, tf)| {
            let tf = if self.config.sublinear_tf {
                1.0 + tf.ln()
            } else {
                tf
            };
            let weight = match &self.idf {
                Some(idf) => tf * idf[column as usize],
                None => tf,
            };
            (column, weight)
        });

        let mut vector = SparseVector::from_entries(self.dimension, weighted);
        let length = match self.config.norm {
            Norm::L2 => vector.norm(),
            Norm::L1 => vector.values().iter().map(|v| v.abs()).sum(),
            Norm::None => 1.0,
        };
        if length > 0.0 && length != 1.0 {
            vector.scale(1.0 / length);
        }
        vector
    }
}

/// Vectorize a raw query against a corpus model.
///
/// The query is lowercased (and whitespace collapsed) before the model's own
/// preprocessing runs, whatever the model's `lowercase` setting says.
pub fn vectorize(query: &str, model: &TermModel) -> SparseVector {
    let vector = model.transform(&normalize(query));
    if vector.is_zero() {
        tracing::trace!(query, "query shares no vocabulary with the corpus");
    }
    vector
}
