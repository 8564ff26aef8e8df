// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document corpus store.
//!
//! A `Corpus` bundles a document table, its fitted term model, and the
//! precomputed term-document matrix. Construction checks the cross-cutting
//! invariants (one matrix row per document, one matrix column per model
//! dimension); the matrix and model check their own on the way in. After
//! that a corpus is immutable for the life of the process.
//!
//! The `CorpusStore` owns one corpus per [`Domain`] and is built once at
//! startup, then shared by reference (or `Arc`) with every search.

use crate::error::{InvariantError, SearchError};
use crate::sparse::CsrMatrix;
use crate::types::{Document, Domain};
use crate::vectorizer::TermModel;

/// One searchable collection: documents + term model + term matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    documents: Vec<Document>,
    term_model: TermModel,
    term_matrix: CsrMatrix,
}

impl Corpus {
    /// Pair a document table with its model and matrix.
    pub fn new(
        documents: Vec<Document>,
        term_model: TermModel,
        term_matrix: CsrMatrix,
    ) -> Result<Self, InvariantError> {
        if term_matrix.rows() != documents.len() {
            return Err(InvariantError::RowCountMismatch {
                rows: term_matrix.rows(),
                documents: documents.len(),
            });
        }
        if term_matrix.cols() != term_model.dimension() {
            return Err(InvariantError::ColumnCountMismatch {
                matrix: term_matrix.cols(),
                model: term_model.dimension(),
            });
        }
        Ok(Self {
            documents,
            term_model,
            term_matrix,
        })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    pub fn term_model(&self) -> &TermModel {
        &self.term_model
    }

    pub fn term_matrix(&self) -> &CsrMatrix {
        &self.term_matrix
    }

    /// Number of documents `N`.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Both corpora, plus the policy for selectors that name neither.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    health: Corpus,
    education: Corpus,
    fallback: Option<Domain>,
}

impl CorpusStore {
    /// A store that rejects unknown domain selectors.
    pub fn new(health: Corpus, education: Corpus) -> Self {
        Self {
            health,
            education,
            fallback: None,
        }
    }

    /// Route unknown selectors to `domain` instead of rejecting them.
    ///
    /// `None` restores rejection. The fallback exists for deployments that
    /// depend on the old "anything that isn't health is education" routing.
    pub fn with_fallback(mut self, domain: Option<Domain>) -> Self {
        self.fallback = domain;
        self
    }

    pub fn fallback(&self) -> Option<Domain> {
        self.fallback
    }

    /// The corpus for a known domain.
    pub fn corpus(&self, domain: Domain) -> &Corpus {
        match domain {
            Domain::Health => &self.health,
            Domain::Education => &self.education,
        }
    }

    /// Turn a caller-supplied selector into a domain, applying the fallback.
    pub fn resolve_domain(&self, selector: &str) -> Result<Domain, SearchError> {
        match selector.parse::<Domain>() {
            Ok(domain) => Ok(domain),
            Err(err) => match self.fallback {
                Some(domain) => {
                    tracing::warn!(
                        selector,
                        fallback = %domain,
                        "unknown domain selector, using fallback corpus"
                    );
                    Ok(domain)
                }
                None => Err(err),
            },
        }
    }

    /// Look up a corpus by selector string.
    pub fn get_corpus(&self, selector: &str) -> Result<&Corpus, SearchError> {
        self.resolve_domain(selector).map(|d| self.corpus(d))
    }

    /// Every `(domain, corpus)` pair in `Domain::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Domain, &Corpus)> + '_ {
        Domain::ALL.into_iter().map(move |d| (d, self.corpus(d)))
    }
}
