//! Repeated and concurrent searches return identical results.

use crate::common::{education_corpus, health_corpus};
use policy_search::{search, CorpusStore, Searcher};

#[test]
fn test_repeated_search_is_identical() {
    let store = CorpusStore::new(health_corpus(), education_corpus());
    let first = search(&store, "coverage for rural clinics", "health", 4).unwrap();
    for _ in 0..10 {
        assert_eq!(search(&store, "coverage for rural clinics", "health", 4).unwrap(), first);
    }
}

#[test]
fn test_store_rebuilt_from_same_input_gives_same_results() {
    let a = CorpusStore::new(health_corpus(), education_corpus());
    let b = CorpusStore::new(health_corpus(), education_corpus());
    for query in ["pupils", "pay scales", "nothing matches this"] {
        assert_eq!(
            search(&a, query, "education", 5).unwrap(),
            search(&b, query, "education", 5).unwrap()
        );
    }
}

#[test]
fn test_concurrent_searches_agree() {
    let searcher = Searcher::new(CorpusStore::new(health_corpus(), education_corpus()));
    let expected = searcher.search("primary pupils", "education", 3).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let searcher = searcher.clone();
                scope.spawn(move || searcher.search("primary pupils", "education", 3).unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
