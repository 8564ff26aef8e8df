//! Ranking order and result-count tests.

use crate::common::{education_corpus, fit_corpus, health_corpus, sample_store};
use policy_search::{search, CorpusStore, Searcher};

fn store() -> CorpusStore {
    CorpusStore::new(health_corpus(), education_corpus())
}

fn titles(results: &[policy_search::SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn test_coverage_example() {
    let results = search(&sample_store(), "coverage", "health", 2).unwrap();
    assert_eq!(titles(&results), vec!["A", "B"]);
    assert!(results[0].score > 0.0);
    assert_eq!(results[1].score, 0.0);
}

#[test]
fn test_best_match_first() {
    let results = search(&store(), "rural clinics", "health", 3).unwrap();
    assert_eq!(results[0].title, "Rural clinics");
    assert!(results[0].score > results[1].score);
}

#[test]
fn test_all_matching_documents_outrank_non_matching() {
    let results = search(&store(), "coverage", "health", 5).unwrap();
    let mut top_two = titles(&results[..2]);
    top_two.sort_unstable();
    assert_eq!(top_two, vec!["Drug pricing", "Universal coverage"]);
    assert!(results[..2].iter().all(|r| r.score > 0.0));
    assert!(results[2..].iter().all(|r| r.score == 0.0));
}

#[test]
fn test_scores_non_increasing_and_bounded() {
    for query in ["coverage", "funding for rural", "mental health schools", "tax"] {
        let results = search(&store(), query, "health", 5).unwrap();
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score, "{query}: {:?}", results);
        }
        for r in &results {
            assert!((0.0..=1.0).contains(&r.score), "{query}: {}", r.score);
        }
    }
}

#[test]
fn test_identical_documents_tie_in_table_order() {
    let corpus = fit_corpus(&[
        ("Other", "unrelated words entirely"),
        ("First", "same text here"),
        ("Middle", "different content"),
        ("Second", "same text here"),
    ]);
    let store = CorpusStore::new(corpus, education_corpus());
    let results = search(&store, "same text", "health", 4).unwrap();
    assert_eq!(titles(&results), vec!["First", "Second", "Other", "Middle"]);
    assert_eq!(results[0].score, results[1].score);
}

#[test]
fn test_top_k_larger_than_corpus() {
    let results = search(&sample_store(), "coverage", "health", 100).unwrap();
    assert_eq!(results.len(), 2);
}

#[test]
fn test_top_k_cuts_results() {
    for k in 1..=5 {
        let results = search(&store(), "funding", "education", k).unwrap();
        assert_eq!(results.len(), k as usize);
    }
}

#[test]
fn test_domains_are_independent() {
    let store = store();
    let health = search(&store, "funding", "health", 1).unwrap();
    let education = search(&store, "funding", "education", 1).unwrap();
    assert_eq!(health[0].title, "Rural clinics");
    assert_eq!(education[0].title, "Adult learning");
}

#[test]
fn test_searcher_matches_free_function() {
    let searcher = Searcher::new(store());
    assert_eq!(
        searcher.search("tuition fees", "education", 3).unwrap(),
        search(searcher.store(), "tuition fees", "education", 3).unwrap()
    );
}

#[test]
fn test_exact_match_scores_one() {
    let results = search(&sample_store(), "tax policy reform", "health", 1).unwrap();
    assert_eq!(results[0].title, "B");
    assert_eq!(results[0].score, 1.0);
}
