// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result formatting: ranked indices back into display records.
//!
//! Each hit becomes a title, a summary of at most [`SUMMARY_WIDTH`]
//! characters, and a score rounded to three decimals. Summaries follow the
//! usual "shorten" rules:
//!
//! - text that already fits is returned verbatim;
//! - otherwise whitespace is collapsed, and if that fits it is returned as is;
//! - otherwise the collapsed text is split into chunks (words, the spaces
//!   between them, and word pieces ending at a hyphen such as `long-` in
//!   `long-term`), the longest chunk prefix that leaves room for `"..."` is
//!   kept, and `"..."` is appended.
//!
//! A chunk wider than the whole summary is cut to fill the line, pulled back
//! to just after its last hyphen in range. If nothing is left to keep, the
//! summary is the bare `"..."`.
//!
//! Widths count characters, not bytes, so multi-byte text is never split
//! inside a character.

use crate::contracts::check_summary_width;
use crate::corpus::Corpus;
use crate::types::{RankedEntry, SearchResult};

/// Longest summary, ellipsis included.
pub const SUMMARY_WIDTH: usize = 250;

/// Appended to a summary that was cut.
pub const ELLIPSIS: &str = "...";

/// Decimal places kept in reported scores.
pub const SCORE_DECIMALS: i32 = 3;

/// Summary of a document body at the standard width.
pub fn summarize(text: &str) -> String {
    shorten(text, SUMMARY_WIDTH)
}

/// Shorten `text` to at most `width` characters. `width` must exceed the
/// ellipsis length.
pub(crate) fn shorten(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        check_summary_width(text, width, false);
        return text.to_string();
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let collapsed_len = words.iter().map(|w| w.chars().count()).sum::<usize>()
        + words.len().saturating_sub(1);
    if collapsed_len <= width {
        let collapsed = words.join(" ");
        check_summary_width(&collapsed, width, false);
        return collapsed;
    }

    let chunks = split_chunks(&words);
    let mut line: Vec<&str> = Vec::new();
    let mut used = 0;
    let mut next = 0;
    while let Some(chunk) = chunks.get(next) {
        let len = chunk.chars().count();
        if used + len > width {
            break;
        }
        line.push(*chunk);
        used += len;
        next += 1;
    }
    if let Some(chunk) = chunks.get(next).filter(|c| c.chars().count() > width) {
        let head = long_chunk_head(chunk, width - used);
        used += head.chars().count();
        line.push(head);
    }

    // Back off to a non-space chunk that leaves room for the ellipsis
    while let Some(last) = line.last() {
        if !last.trim().is_empty() && used + ELLIPSIS.len() <= width {
            let mut summary = line.concat();
            summary.push_str(ELLIPSIS);
            check_summary_width(&summary, width, true);
            return summary;
        }
        used -= last.chars().count();
        line.pop();
    }
    ELLIPSIS.to_string()
}

/// `\w`: letters, digits, underscore.
fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Word characters that are not digits.
fn is_letter(c: char) -> bool {
    is_word(c) && !c.is_numeric()
}

/// Characters that may sit directly before an em-dash.
fn is_word_punct(c: char) -> bool {
    is_word(c) || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}

/// Interleave single-space chunks with the pieces of each word.
fn split_chunks<'a>(words: &[&'a str]) -> Vec<&'a str> {
    let mut chunks = Vec::with_capacity(words.len() * 2);
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            chunks.push(" ");
        }
        chunks.extend(word_pieces(word));
    }
    chunks
}

/// Split a whitespace-free word at hyphens and em-dashes.
///
/// `long-term-care` → `["long-", "term-", "care"]`, `reform--now` →
/// `["reform", "--", "now"]`. A hyphen only splits between letters, with at
/// least two letters (or `x-y-`) before it, so `COVID-19` and `e-mail` stay
/// whole.
fn word_pieces(word: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let offset = |i: usize| chars.get(i).map_or(word.len(), |&(o, _)| o);

    let mut pieces = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        if let Some(run) = em_dash_at(&chars, start) {
            pieces.push(&word[offset(start)..offset(start + run)]);
            start += run;
            continue;
        }
        let mut end = start + 1;
        while end < chars.len() {
            if hyphen_break_at(&chars, end) {
                end += 1;
                break;
            }
            if em_dash_at(&chars, end).is_some() {
                break;
            }
            end += 1;
        }
        pieces.push(&word[offset(start)..offset(end)]);
        start = end;
    }
    pieces
}

fn char_at(chars: &[(usize, char)], i: Option<usize>) -> Option<char> {
    i.and_then(|i| chars.get(i)).map(|&(_, c)| c)
}

fn letter_at(chars: &[(usize, char)], i: Option<usize>) -> bool {
    char_at(chars, i).is_some_and(is_letter)
}

/// Whether the word may break just after a hyphen at `p`.
fn hyphen_break_at(chars: &[(usize, char)], p: usize) -> bool {
    if char_at(chars, Some(p)) != Some('-') {
        return false;
    }
    let behind = (letter_at(chars, p.checked_sub(2)) && letter_at(chars, p.checked_sub(1)))
        || (letter_at(chars, p.checked_sub(3))
            && char_at(chars, p.checked_sub(2)) == Some('-')
            && letter_at(chars, p.checked_sub(1)));
    let ahead = letter_at(chars, Some(p + 1))
        && (letter_at(chars, Some(p + 2))
            || (char_at(chars, Some(p + 2)) == Some('-') && letter_at(chars, Some(p + 3))));
    behind && ahead
}

/// Length of an em-dash (two or more hyphens between words) starting at `i`.
fn em_dash_at(chars: &[(usize, char)], i: usize) -> Option<usize> {
    let run = chars[i..].iter().take_while(|&&(_, c)| c == '-').count();
    let before = i.checked_sub(1);
    (run >= 2
        && char_at(chars, before).is_some_and(is_word_punct)
        && char_at(chars, Some(i + run)).is_some_and(is_word))
    .then_some(run)
}

/// First `space_left` characters of a chunk too wide for any line, ending
/// just after the last hyphen in that range when there is one.
fn long_chunk_head(chunk: &str, space_left: usize) -> &str {
    let cut = chunk
        .char_indices()
        .nth(space_left)
        .map_or(chunk.len(), |(i, _)| i);
    let head = &chunk[..cut];
    match head.rfind('-') {
        Some(h) if h > 0 && head[..h].chars().any(|c| c != '-') => &chunk[..=h],
        _ => head,
    }
}

/// Round to [`SCORE_DECIMALS`] places, halves away from zero.
pub fn round_score(score: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DECIMALS);
    (score * factor).round() / factor
}

/// Build display records for ranked entries, in ranked order.
///
/// Entries come from ranking the same corpus, so every index has a document;
/// an index outside the corpus panics.
pub fn format_results(corpus: &Corpus, ranked: &[RankedEntry]) -> Vec<SearchResult> {
    let documents = corpus.documents();
    ranked
        .iter()
        .map(|entry| {
            let doc = &documents[entry.index];
            SearchResult {
                title: doc.title.clone(),
                summary: summarize(doc.text()),
                score: round_score(entry.score),
            }
        })
        .collect()
}
