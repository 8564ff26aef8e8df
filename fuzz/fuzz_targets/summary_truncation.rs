// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for summary truncation.
//!
//! Multi-byte characters, whitespace runs, single enormous words: whatever
//! the text, the summary never exceeds the width, never splits a character,
//! and is always a prefix of the whitespace-collapsed text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use policy_search::{summarize, SUMMARY_WIDTH};

fuzz_target!(|text: String| {
    let summary = summarize(&text);
    assert!(summary.chars().count() <= SUMMARY_WIDTH);

    if text.chars().count() <= SUMMARY_WIDTH {
        assert_eq!(summary, text);
        return;
    }

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= SUMMARY_WIDTH {
        assert_eq!(summary, collapsed);
    } else {
        let kept = summary
            .strip_suffix("...")
            .expect("truncated summary ends with the ellipsis");
        assert!(collapsed.starts_with(kept));
    }
});
