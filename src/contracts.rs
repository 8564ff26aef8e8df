//! Runtime contracts for the search pipeline.
//!
//! Debug-build assertions for the properties every search result must have.
//! They compile to nothing in release builds and fail loudly in tests and
//! development when a change breaks an ordering or bound.
//!
//! | Contract                | Property                                            |
//! |-------------------------|-----------------------------------------------------|
//! | `check_top_k_bound`     | result length is `min(k, N)`                        |
//! | `check_ranked_order`    | non-increasing score, ties in ascending index       |
//! | `check_scores_in_range` | every cosine lies in `[-1, 1]`                      |
//! | `check_summary_width`   | summary fits the width, ellipsis only when cut      |

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

/// The ellipsis must leave room for at least one character of text.
const _: () = {
    assert!(crate::format::ELLIPSIS.len() < crate::format::SUMMARY_WIDTH);
};

use std::cmp::Ordering;

use crate::scoring::ranking::compare_entries;
use crate::types::RankedEntry;

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Result count equals `min(k, n)`.
#[inline]
pub fn check_top_k_bound(len: usize, k: usize, n: usize) {
    debug_assert_eq!(
        len,
        k.min(n),
        "CONTRACT VIOLATED: top-k bound\n  returned {} results for k={} over {} documents",
        len,
        k,
        n
    );
}

/// Entries are strictly ordered by `(score desc, index asc)`.
#[inline]
pub fn check_ranked_order(entries: &[RankedEntry]) {
    debug_assert!(
        entries
            .windows(2)
            .all(|w| compare_entries(&w[0], &w[1]) == Ordering::Less),
        "CONTRACT VIOLATED: ranked order\n  entries are not sorted by (score desc, index asc): {:?}",
        entries
    );
}

/// Cosine scores stay in `[-1, 1]` and are never NaN.
#[inline]
pub fn check_scores_in_range(entries: &[RankedEntry]) {
    debug_assert!(
        entries.iter().all(|e| (-1.0..=1.0).contains(&e.score)),
        "CONTRACT VIOLATED: score range\n  score outside [-1, 1]: {:?}",
        entries
    );
}

// ============================================================================
// FORMATTING CONTRACTS
// ============================================================================

/// A summary never exceeds `width` characters, and carries the ellipsis
/// marker exactly when the text was truncated.
#[inline]
pub fn check_summary_width(summary: &str, width: usize, truncated: bool) {
    debug_assert!(
        summary.chars().count() <= width,
        "CONTRACT VIOLATED: summary width\n  {} chars > {}",
        summary.chars().count(),
        width
    );
    debug_assert!(
        !truncated || summary.ends_with(crate::format::ELLIPSIS),
        "CONTRACT VIOLATED: truncated summary without ellipsis: {:?}",
        summary
    );
}
