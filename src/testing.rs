//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It builds small, internally consistent corpora from raw text so tests
//! never need artifact files on disk.

#![doc(hidden)]

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::corpus::{Corpus, CorpusStore};
use crate::sparse::{CsrMatrix, SparseVector};
use crate::types::Document;
use crate::utils::tokenize;
use crate::vectorizer::{TermModel, TermModelConfig};

/// Create a document with a body.
pub fn make_document(title: &str, text: &str) -> Document {
    Document {
        title: title.to_string(),
        full_text: Some(text.to_string()),
    }
}

/// Create a document with no body.
pub fn make_bodiless_document(title: &str) -> Document {
    Document {
        title: title.to_string(),
        full_text: None,
    }
}

/// Fit a default-config model over `(title, text)` pairs and build the
/// matching corpus.
///
/// Vocabulary columns follow sorted term order; idf is the smoothed
/// `ln((1 + n) / (1 + df)) + 1`. Each row is the model's own transform of the
/// document text, so queries and rows share one pipeline.
pub fn fit_corpus(docs: &[(&str, &str)]) -> Corpus {
    let documents: Vec<Document> = docs
        .iter()
        .map(|(title, text)| make_document(title, text))
        .collect();
    fit_documents(documents)
}

/// Same as [`fit_corpus`] for prebuilt documents.
pub fn fit_documents(documents: Vec<Document>) -> Corpus {
    let config = TermModelConfig::default();

    let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
    for doc in &documents {
        let lowered = doc.text().to_lowercase();
        let unique: BTreeSet<&str> = tokenize(&lowered, config.min_token_length)
            .into_iter()
            .collect();
        for term in unique {
            *doc_freq.entry(term.to_string()).or_insert(0) += 1;
        }
    }

    let n = documents.len() as f64;
    let vocabulary: HashMap<String, u32> = doc_freq
        .keys()
        .enumerate()
        .map(|(column, term)| (term.clone(), column as u32))
        .collect();
    let idf: Vec<f64> = doc_freq
        .values()
        .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
        .collect();
    let dimension = idf.len();

    let model = TermModel::new(dimension, vocabulary, Some(idf), config)
        .expect("fitted model is consistent");
    let rows: Vec<SparseVector> = documents
        .iter()
        .map(|doc| model.transform(doc.text()))
        .collect();
    let matrix = CsrMatrix::from_rows(dimension, &rows).expect("rows come from the model");

    Corpus::new(documents, model, matrix).expect("one row per document")
}

/// Two-document health corpus and a small education corpus.
pub fn sample_store() -> CorpusStore {
    CorpusStore::new(
        fit_corpus(&[
            ("A", "universal coverage for all citizens"),
            ("B", "tax policy reform"),
        ]),
        fit_corpus(&[
            ("School meals", "free school meals for every primary pupil"),
            ("Teacher pay", "national pay scales for classroom teachers"),
            ("Tuition fees", "abolish university tuition fees"),
            ("Class sizes", "cap primary class sizes at thirty pupils"),
        ]),
    )
}
