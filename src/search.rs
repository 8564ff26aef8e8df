// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search entry point: selector, query and count in, formatted hits out.
//!
//! ```text
//! resolve domain → validate top_k → vectorize → rank → format
//! ```
//!
//! Each stage either succeeds or returns the first error; nothing is
//! partially returned. The store is read-only, so any number of searches can
//! run concurrently against one `Searcher` (or one `&CorpusStore`) without
//! locking.

use std::sync::Arc;
use std::time::Instant;

use crate::corpus::CorpusStore;
use crate::error::SearchError;
use crate::format::format_results;
use crate::scoring::ranking::{rank, TopK, DEFAULT_TOP_K};
use crate::types::SearchResult;
use crate::vectorizer::vectorize;

/// Run one search against `store`.
///
/// `domain` must name a corpus (or the store must have a fallback
/// configured) and `top_k` must be positive. A query that shares no terms
/// with the corpus is not an error: every document scores 0.0 and the first
/// `top_k` documents come back in table order.
pub fn search(
    store: &CorpusStore,
    query: &str,
    domain: &str,
    top_k: i64,
) -> Result<Vec<SearchResult>, SearchError> {
    let start = Instant::now();

    let resolved = store.resolve_domain(domain)?;
    let top_k = TopK::new(top_k)?;
    let corpus = store.corpus(resolved);

    let query_vector = vectorize(query, corpus.term_model());
    let ranked = rank(&query_vector, corpus.term_matrix(), top_k)?;
    let results = format_results(corpus, &ranked);

    tracing::debug!(
        domain = %resolved,
        top_k = top_k.get(),
        results = results.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "search complete"
    );

    Ok(results)
}

/// Cheap, cloneable handle over a shared [`CorpusStore`].
///
/// Clone it into every request handler or worker thread; all clones read
/// the same corpora.
#[derive(Debug, Clone)]
pub struct Searcher {
    store: Arc<CorpusStore>,
}

impl Searcher {
    pub fn new(store: CorpusStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &CorpusStore {
        &self.store
    }

    /// See [`search`].
    pub fn search(
        &self,
        query: &str,
        domain: &str,
        top_k: i64,
    ) -> Result<Vec<SearchResult>, SearchError> {
        search(&self.store, query, domain, top_k)
    }

    /// Search with the default result count.
    pub fn search_default(
        &self,
        query: &str,
        domain: &str,
    ) -> Result<Vec<SearchResult>, SearchError> {
        self.search(query, domain, DEFAULT_TOP_K as i64)
    }
}

impl From<Arc<CorpusStore>> for Searcher {
    fn from(store: Arc<CorpusStore>) -> Self {
        Self { store }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_store;

    #[test]
    fn test_coverage_query_ranks_matching_document_first() {
        let results = search(&sample_store(), "coverage", "health", 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "A");
        assert!(results[0].score > 0.0);
        assert_eq!(results[1].title, "B");
        assert_eq!(results[1].score, 0.0);
    }

    #[test]
    fn test_unknown_domain_checked_before_top_k() {
        let err = search(&sample_store(), "coverage", "nonexistent", 0).unwrap_err();
        assert_eq!(err, SearchError::UnknownDomain("nonexistent".to_string()));
    }

    #[test]
    fn test_invalid_top_k() {
        let store = sample_store();
        assert_eq!(
            search(&store, "coverage", "health", 0),
            Err(SearchError::InvalidTopK(0))
        );
        assert_eq!(
            search(&store, "coverage", "health", -1),
            Err(SearchError::InvalidTopK(-1))
        );
    }

    #[test]
    fn test_searcher_default_count() {
        let searcher = Searcher::new(sample_store());
        let results = searcher.search_default("pupils", "education").unwrap();
        assert_eq!(results.len(), DEFAULT_TOP_K);
    }

    #[test]
    fn test_searcher_clones_share_store() {
        let searcher = Searcher::new(sample_store());
        let clone = searcher.clone();
        assert!(std::ptr::eq(searcher.store(), clone.store()));
        assert_eq!(
            searcher.search("tuition", "education", 1),
            clone.search("tuition", "education", 1)
        );
    }
}
