//! Degenerate queries, empty corpora and summary edge cases.

use crate::common::{
    education_corpus, fit_corpus, fit_documents, health_corpus, long_text, make_document,
};
use policy_search::testing::make_bodiless_document;
use policy_search::{search, CorpusStore, SUMMARY_WIDTH};

fn store() -> CorpusStore {
    CorpusStore::new(health_corpus(), education_corpus())
}

#[test]
fn test_no_vocabulary_overlap_scores_zero_in_table_order() {
    let results = search(&store(), "xylophone zeppelin", "health", 3).unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.score == 0.0));
    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Universal coverage", "Tax reform", "Rural clinics"]);
}

#[test]
fn test_empty_and_punctuation_queries_are_not_errors() {
    for query in ["", "   ", "?!.,", "a b c"] {
        let results = search(&store(), query, "health", 2).unwrap();
        assert_eq!(results.len(), 2, "query {query:?}");
        assert!(results.iter().all(|r| r.score == 0.0), "query {query:?}");
    }
}

#[test]
fn test_query_case_and_spacing_do_not_matter() {
    let store = store();
    let plain = search(&store, "rural clinics", "health", 3).unwrap();
    let shouty = search(&store, "  RURAL\tClinics  ", "health", 3).unwrap();
    assert_eq!(plain, shouty);
}

#[test]
fn test_empty_corpus_returns_nothing() {
    let store = CorpusStore::new(fit_corpus(&[]), education_corpus());
    let results = search(&store, "coverage", "health", 3).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_long_text_summary_is_truncated() {
    let body = long_text(100);
    let corpus = fit_documents(vec![make_document("Long", &body)]);
    let store = CorpusStore::new(corpus, education_corpus());
    let results = search(&store, "reform", "health", 1).unwrap();
    let summary = &results[0].summary;
    assert!(summary.ends_with("..."));
    assert!(summary.chars().count() <= SUMMARY_WIDTH);
    assert!(body.starts_with(summary.trim_end_matches("...")));
}

#[test]
fn test_long_summary_may_end_inside_hyphenated_word() {
    let body = format!("{} long-term-care reform", long_text(41));
    let corpus = fit_documents(vec![make_document("Care", &body)]);
    let store = CorpusStore::new(corpus, education_corpus());
    let results = search(&store, "care", "health", 1).unwrap();
    // 41 words are already past the width, so the cut lands among them
    assert!(results[0].summary.ends_with("reform..."));

    // 34 words (238 chars) leave room for "long-" but not "long-term-"
    let body = format!("{} long-term-care reform", long_text(34));
    let corpus = fit_documents(vec![make_document("Care", &body)]);
    let store = CorpusStore::new(corpus, education_corpus());
    let results = search(&store, "care", "health", 1).unwrap();
    assert_eq!(results[0].summary, format!("{} long-...", long_text(34)));
}

#[test]
fn test_short_text_summary_is_verbatim() {
    let body = "Expand  mental health\nservices in schools.";
    let corpus = fit_documents(vec![make_document("Short", body)]);
    let store = CorpusStore::new(corpus, education_corpus());
    let results = search(&store, "schools", "health", 1).unwrap();
    assert_eq!(results[0].summary, body);
}

#[test]
fn test_document_without_body() {
    let corpus = fit_documents(vec![
        make_bodiless_document("Title only"),
        make_document("Body", "policy text"),
    ]);
    let store = CorpusStore::new(corpus, education_corpus());
    let results = search(&store, "policy", "health", 2).unwrap();
    assert_eq!(results[0].title, "Body");
    assert_eq!(results[1].title, "Title only");
    assert_eq!(results[1].summary, "");
    assert_eq!(results[1].score, 0.0);
}

#[test]
fn test_multibyte_text() {
    let corpus = fit_corpus(&[
        ("Café", "café culture and über policy"),
        ("Plain", "plain policy"),
    ]);
    let store = CorpusStore::new(corpus, education_corpus());
    let results = search(&store, "CAFÉ", "health", 2).unwrap();
    assert_eq!(results[0].title, "Café");
    assert!(results[0].score > 0.0);
}
