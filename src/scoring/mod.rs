// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Similarity ranking: how documents get their numbers and their order.
//!
//! Every query is an exact linear scan. Each document row gets a cosine score
//! against the query vector, then the scores are ordered by
//! `(score desc, document index asc)` and cut to `top_k`. There is no
//! approximate index; corpora are hundreds to low thousands of rows, where
//! exactness is cheaper than maintaining anything cleverer.

mod core;
pub mod ranking;

pub use self::core::*;
