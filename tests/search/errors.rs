//! Request validation: domain selectors and result counts.

use crate::common::{education_corpus, health_corpus, sample_store};
use policy_search::{search, CorpusStore, Domain, SearchError};

#[test]
fn test_zero_and_negative_top_k_rejected() {
    let store = sample_store();
    for k in [0, -1, -100, i64::MIN] {
        assert_eq!(
            search(&store, "coverage", "health", k),
            Err(SearchError::InvalidTopK(k))
        );
    }
}

#[test]
fn test_unknown_domain_rejected() {
    let err = search(&sample_store(), "coverage", "nonexistent", 3).unwrap_err();
    assert_eq!(err, SearchError::UnknownDomain("nonexistent".to_string()));
    assert!(err.to_string().contains("nonexistent"));
}

#[test]
fn test_selectors_are_exact() {
    let store = sample_store();
    for selector in ["Health", "HEALTH", " health", "health ", "", "educ"] {
        assert!(
            matches!(
                search(&store, "coverage", selector, 3),
                Err(SearchError::UnknownDomain(_))
            ),
            "selector {selector:?}"
        );
    }
}

#[test]
fn test_domain_checked_before_top_k() {
    assert_eq!(
        search(&sample_store(), "coverage", "nonexistent", 0),
        Err(SearchError::UnknownDomain("nonexistent".to_string()))
    );
}

#[test]
fn test_fallback_routes_unknown_selectors() {
    let store = CorpusStore::new(health_corpus(), education_corpus())
        .with_fallback(Some(Domain::Education));
    let via_fallback = search(&store, "tuition", "nonexistent", 3).unwrap();
    let direct = search(&store, "tuition", "education", 3).unwrap();
    assert_eq!(via_fallback, direct);

    // top_k is still validated after the fallback resolves
    assert_eq!(
        search(&store, "tuition", "nonexistent", 0),
        Err(SearchError::InvalidTopK(0))
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        SearchError::InvalidTopK(-1).to_string(),
        "top_k must be a positive integer, got -1"
    );
    assert!(SearchError::UnknownDomain("x".into())
        .to_string()
        .contains("expected 'health' or 'education'"));
}
