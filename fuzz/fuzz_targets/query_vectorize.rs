// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query vectorisation and the search path behind it.
//!
//! Arbitrary text goes through both a default model and one with bigrams,
//! sublinear tf and accent stripping. The vector must stay well-formed and
//! every search must respect the top-k bound, score range and ordering.

#![no_main]

use std::collections::HashMap;
use std::sync::OnceLock;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use policy_search::testing::sample_store;
use policy_search::{search, vectorize, CorpusStore, Norm, TermModel, TermModelConfig};

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    top_k: i8,
    education: bool,
}

fn bigram_model() -> TermModel {
    let terms = [
        "universal", "coverage", "universal coverage", "tax", "reform", "tax reform",
        "cafe", "uber", "policy",
    ];
    let vocabulary: HashMap<String, u32> = terms
        .iter()
        .enumerate()
        .map(|(i, t)| (t.to_string(), i as u32))
        .collect();
    let config = TermModelConfig {
        strip_accents: true,
        ngram_range: (1, 2),
        sublinear_tf: true,
        norm: Norm::L2,
        stop_words: vec!["the".to_string(), "for".to_string()],
        ..TermModelConfig::default()
    };
    let idf = (0..terms.len()).map(|i| 1.0 + i as f64 / 10.0).collect();
    TermModel::new(terms.len(), vocabulary, Some(idf), config).expect("valid fuzz model")
}

fuzz_target!(|input: Input| {
    static STORE: OnceLock<CorpusStore> = OnceLock::new();
    static BIGRAMS: OnceLock<TermModel> = OnceLock::new();
    let store = STORE.get_or_init(sample_store);
    let bigrams = BIGRAMS.get_or_init(bigram_model);

    // Cap query length to avoid timeout
    let query: String = input.query.chars().take(500).collect();

    for model in [store.get_corpus("health").expect("health").term_model(), bigrams] {
        let v = vectorize(&query, model);
        assert!(v.indices().windows(2).all(|w| w[0] < w[1]), "unsorted vector");
        assert!(v.indices().iter().all(|&c| (c as usize) < model.dimension()));
        assert!(v.values().iter().all(|x| x.is_finite() && *x > 0.0));
        if !v.is_zero() {
            assert!((v.norm() - 1.0).abs() < 1e-9, "norm {}", v.norm());
        }
    }

    let domain = if input.education { "education" } else { "health" };
    let k = i64::from(input.top_k);
    match search(store, &query, domain, k) {
        Ok(results) => {
            let n = store.get_corpus(domain).expect("known domain").len();
            assert!(k > 0);
            assert_eq!(results.len(), (k as usize).min(n));
            for r in &results {
                assert!((0.0..=1.0).contains(&r.score), "score {}", r.score);
            }
            for pair in results.windows(2) {
                assert!(pair[0].score >= pair[1].score);
            }
        }
        Err(_) => assert!(k <= 0),
    }
});
