// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: domains, documents, and what a search hands back.
//!
//! Documents are immutable once a corpus is loaded. Row `i` of a corpus's
//! term matrix always describes `documents[i]`, so the index into the
//! document table doubles as the document identity everywhere else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// The two independent policy corpora.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Health,
    Education,
}

impl Domain {
    /// Every domain, in a fixed order.
    pub const ALL: [Domain; 2] = [Domain::Health, Domain::Education];

    /// The selector string callers pass to `search`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Health => "health",
            Domain::Education => "education",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact match only: `"Health"` or `" health"` are unknown selectors.
impl FromStr for Domain {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "health" => Ok(Domain::Health),
            "education" => Ok(Domain::Education),
            other => Err(SearchError::UnknownDomain(other.to_string())),
        }
    }
}

/// One policy document as stored in the corpus table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub title: String,
    /// Body text. Some source rows have none.
    #[serde(default)]
    pub full_text: Option<String>,
}

impl Document {
    /// Body text, with a missing value read as the empty string.
    pub fn text(&self) -> &str {
        self.full_text.as_deref().unwrap_or("")
    }
}

/// A ranked position in a corpus: document index plus raw cosine score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEntry {
    pub index: usize,
    pub score: f64,
}

/// What the presentation layer renders for one hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    /// At most 250 characters, ending in `...` when the text was cut.
    pub summary: String,
    /// Cosine similarity rounded to 3 decimal places.
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_round_trips_through_selector() {
        for domain in Domain::ALL {
            assert_eq!(domain.as_str().parse::<Domain>(), Ok(domain));
        }
    }

    #[test]
    fn test_domain_rejects_unknown_selector() {
        assert_eq!(
            "nonexistent".parse::<Domain>(),
            Err(SearchError::UnknownDomain("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_domain_selector_is_case_sensitive() {
        assert!("Health".parse::<Domain>().is_err());
        assert!(" education".parse::<Domain>().is_err());
    }

    #[test]
    fn test_parse_document_without_full_text() {
        let json = r#"{"title": "Tax Reform Act"}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.full_text, None);
        assert_eq!(doc.text(), "");
    }

    #[test]
    fn test_parse_document_with_null_full_text() {
        let json = r#"{"title": "Tax Reform Act", "fullText": null}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.text(), "");
    }

    #[test]
    fn test_search_result_serializes_flat() {
        let result = SearchResult {
            title: "A".to_string(),
            summary: "universal coverage".to_string(),
            score: 0.707,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["title"], "A");
        assert_eq!(json["score"], 0.707);
    }
}
