// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Artifact ingestion: build the corpus store from files on disk.
//!
//! Models and matrices are fitted offline; this module only reads them.
//!
//! ```text
//! <artifacts>/manifest.json
//! <artifacts>/<domain>_model.json     TermModel
//! <artifacts>/<domain>_index.json     { matrix: CSR, documents: [...] }
//! ```
//!
//! Loading is all-or-nothing. Every structural invariant is checked here, so
//! a store that loads never fails a search for shape reasons.

mod artifact;
mod manifest;

pub use artifact::{read_bytes, read_json, IndexArtifact};
pub use manifest::{CorpusEntry, Manifest, MANIFEST_VERSION};

use std::path::Path;

use crate::corpus::{Corpus, CorpusStore};
use crate::error::LoadError;
use crate::types::Domain;
use crate::vectorizer::TermModel;

/// Manifest file name inside an artifact directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Load both corpora described by `<dir>/manifest.json`.
///
/// The manifest's `fallbackDomain` becomes the store's fallback.
pub fn load_store(dir: &Path) -> Result<CorpusStore, LoadError> {
    let manifest = Manifest::read(&dir.join(MANIFEST_FILE))?;

    let health = load_corpus(dir, Domain::Health, manifest.entry(Domain::Health)?)?;
    let education = load_corpus(dir, Domain::Education, manifest.entry(Domain::Education)?)?;

    Ok(CorpusStore::new(health, education).with_fallback(manifest.fallback_domain))
}

/// Load one corpus from the files named by `entry`, relative to `dir`.
pub fn load_corpus(dir: &Path, domain: Domain, entry: &CorpusEntry) -> Result<Corpus, LoadError> {
    let model: TermModel = read_json(&dir.join(&entry.model), entry.model_crc32)?;
    let index: IndexArtifact = read_json(&dir.join(&entry.index), entry.index_crc32)?;

    let corpus = Corpus::new(index.documents, model, index.matrix)
        .map_err(|source| LoadError::Invariant { domain, source })?;

    tracing::info!(
        domain = %domain,
        documents = corpus.len(),
        dimension = corpus.term_model().dimension(),
        nnz = corpus.term_matrix().nnz(),
        "loaded corpus"
    );

    Ok(corpus)
}
