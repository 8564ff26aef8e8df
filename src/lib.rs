//! Domain-scoped similarity search over policy documents.
//!
//! Two fixed corpora (`health`, `education`) are loaded once from offline
//! artifacts: a fitted TF-IDF term model plus a sparse term-document matrix
//! per corpus. A search vectorizes the query with that corpus's model, scores
//! every document by cosine similarity, and returns the top `k` as title,
//! summary and rounded score.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │  loader/     │────▶│  corpus.rs    │────▶│  search.rs   │
//! │ (manifest,   │     │ (Corpus,      │     │ (search,     │
//! │  artifacts)  │     │  CorpusStore) │     │  Searcher)   │
//! └──────────────┘     └───────────────┘     └──────────────┘
//!                                                   │
//!          ┌──────────────────┬─────────────────────┼
//!          ▼                  ▼                     ▼
//! ┌────────────────┐  ┌────────────────┐   ┌────────────────┐
//! │ vectorizer.rs  │  │  scoring/      │   │  format.rs     │
//! │ (TermModel)    │  │ (cosine, rank) │   │ (summary,      │
//! └────────────────┘  └────────────────┘   │  rounding)     │
//!          │                  │            └────────────────┘
//!          ▼                  ▼
//! ┌─────────────────────────────────────┐
//! │  sparse.rs  (SparseVector,          │
//! │              CsrMatrix)             │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! | Checked where          | Property                                              |
//! |------------------------|-------------------------------------------------------|
//! | `CsrMatrix` decode     | well-formed CSR, sorted in-range columns, finite data |
//! | `TermModel` decode     | vocabulary columns `< D` and unique, finite idf       |
//! | `Corpus::new`          | `N == documents`, `D == model.dimension`              |
//! | `contracts` (debug)    | top-k bound, ranked order, score range, summary width |
//!
//! # Usage
//!
//! ```ignore
//! use policy_search::{load_store, Searcher};
//!
//! let store = load_store(Path::new("artifacts"))?;
//! let searcher = Searcher::new(store);
//! let results = searcher.search("universal coverage", "health", 3)?;
//! ```

pub mod contracts;
pub mod corpus;
pub mod error;
pub mod format;
pub mod loader;
pub mod scoring;
pub mod search;
pub mod sparse;
pub mod testing;
pub mod types;
pub mod utils;
pub mod vectorizer;

// Re-exports for public API
pub use corpus::{Corpus, CorpusStore};
pub use error::{InvariantError, LoadError, SearchError};
pub use format::{format_results, round_score, summarize, SUMMARY_WIDTH};
pub use loader::{load_corpus, load_store, CorpusEntry, IndexArtifact, Manifest};
pub use scoring::ranking::{rank, TopK, DEFAULT_TOP_K};
pub use scoring::{cosine_similarity, score_all};
pub use search::{search, Searcher};
pub use sparse::{CsrMatrix, SparseVector};
pub use types::{Document, Domain, RankedEntry, SearchResult};
pub use utils::normalize;
pub use vectorizer::{vectorize, Norm, TermModel, TermModelConfig};
