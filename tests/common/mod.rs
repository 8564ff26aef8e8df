//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use policy_search::loader::{MANIFEST_FILE, MANIFEST_VERSION};
use policy_search::{Corpus, CorpusEntry, Domain, IndexArtifact, Manifest};
use serde::Serialize;

// Re-export canonical test utilities from policy_search::testing
pub use policy_search::testing::{fit_corpus, fit_documents, make_document, sample_store};

// ============================================================================
// CORPORA
// ============================================================================

/// Health corpus with overlapping vocabulary so scores spread out.
pub fn health_corpus() -> Corpus {
    fit_corpus(&[
        ("Universal coverage", "universal coverage for all citizens"),
        ("Tax reform", "tax policy reform"),
        ("Rural clinics", "funding for rural clinics and rural hospitals"),
        ("Drug pricing", "negotiate drug pricing for public coverage"),
        ("Mental health", "expand mental health services in schools"),
    ])
}

/// Education corpus.
pub fn education_corpus() -> Corpus {
    fit_corpus(&[
        ("School meals", "free school meals for every primary pupil"),
        ("Teacher pay", "national pay scales for classroom teachers"),
        ("Tuition fees", "abolish university tuition fees"),
        ("Class sizes", "cap primary class sizes at thirty pupils"),
        ("Adult learning", "funding for adult learning and retraining"),
    ])
}

/// `words` repetitions of "reform"; over 250 characters from 36 words up.
pub fn long_text(words: usize) -> String {
    vec!["reform"; words].join(" ")
}

// ============================================================================
// ARTIFACT WRITERS
// ============================================================================

/// Serialize `value` to `path` and return the CRC-32 of the bytes written.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> u32 {
    let bytes = serde_json::to_vec_pretty(value).expect("serializable");
    fs::write(path, &bytes).expect("write artifact");
    crc32fast::hash(&bytes)
}

/// Write one corpus as `<domain>_model.json` + `<domain>_index.json`.
pub fn write_corpus(dir: &Path, domain: Domain, corpus: &Corpus, checksums: bool) -> CorpusEntry {
    let mut entry = CorpusEntry::conventional(domain);
    let model_crc = write_json(&dir.join(&entry.model), corpus.term_model());
    let index = IndexArtifact {
        matrix: corpus.term_matrix().clone(),
        documents: corpus.documents().to_vec(),
    };
    let index_crc = write_json(&dir.join(&entry.index), &index);
    if checksums {
        entry.model_crc32 = Some(model_crc);
        entry.index_crc32 = Some(index_crc);
    }
    entry
}

/// Write a complete artifact directory and return the manifest written.
pub fn write_artifacts(
    dir: &Path,
    health: &Corpus,
    education: &Corpus,
    fallback: Option<Domain>,
    checksums: bool,
) -> Manifest {
    let corpora = [
        (Domain::Health, write_corpus(dir, Domain::Health, health, checksums)),
        (
            Domain::Education,
            write_corpus(dir, Domain::Education, education, checksums),
        ),
    ]
    .into_iter()
    .collect();
    let manifest = Manifest {
        version: MANIFEST_VERSION,
        fallback_domain: fallback,
        corpora,
    };
    write_manifest(dir, &manifest);
    manifest
}

/// Overwrite `manifest.json`.
pub fn write_manifest(dir: &Path, manifest: &Manifest) {
    write_json(&dir.join(MANIFEST_FILE), manifest);
}

/// Artifact directory holding the standard fixtures.
pub fn standard_artifacts(checksums: bool) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write_artifacts(
        dir.path(),
        &health_corpus(),
        &education_corpus(),
        None,
        checksums,
    );
    dir
}
