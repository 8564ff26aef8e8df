// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the policy-search CLI.
//!
//! Boxed result tables with a OneDark or One Light palette. The theme comes
//! from `POLICY_SEARCH_THEME` ("dark" or "light") when set, then `COLORFGBG`,
//! and defaults to dark. Respects `NO_COLOR` and non-TTY detection, in which
//! case the boxes are drawn without escape codes.

use std::path::Path;
use std::sync::OnceLock;

use policy_search::{CorpusStore, SearchResult};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("POLICY_SEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": background 7 or 9+ is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// True color escape sequence helper
fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Palette roles used by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Border,
    Label,
    Title,
    Strong,
    Medium,
    Faint,
}

fn palette(theme: Theme, tone: Tone) -> (u8, u8, u8) {
    match (theme, tone) {
        (Theme::Dark, Tone::Border) => (92, 99, 112),    // #5c6370
        (Theme::Dark, Tone::Label) => (86, 182, 194),    // #56b6c2
        (Theme::Dark, Tone::Title) => (97, 175, 239),    // #61afef
        (Theme::Dark, Tone::Strong) => (152, 195, 121),  // #98c379
        (Theme::Dark, Tone::Medium) => (229, 192, 123),  // #e5c07b
        (Theme::Dark, Tone::Faint) => (92, 99, 112),     // #5c6370
        (Theme::Light, Tone::Border) => (160, 161, 167), // #a0a1a7
        (Theme::Light, Tone::Label) => (1, 132, 188),    // #0184bc
        (Theme::Light, Tone::Title) => (64, 120, 242),   // #4078f2
        (Theme::Light, Tone::Strong) => (80, 161, 79),   // #50a14f
        (Theme::Light, Tone::Medium) => (193, 132, 1),   // #c18401
        (Theme::Light, Tone::Faint) => (160, 161, 167),  // #a0a1a7
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Escape code for a tone, or nothing when colors are off.
fn paint(tone: Tone) -> String {
    if use_colors() {
        rgb(palette(theme(), tone))
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Apply a tone with optional modifiers
pub fn themed(tone: Tone, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), paint(tone), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Greedy word wrap to `width` characters. Words longer than a line are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
        let len = chars.len();
        if len == 0 {
            continue;
        }
        if line_len > 0 && line_len + 1 + len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(chars);
        line_len += len;
    }
    if line_len > 0 {
        lines.push(line);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = paint(Tone::Border);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

fn labelled_rule(left: char, right: char, label: &str) {
    let border = paint(Tone::Border);
    let label_part = format!("─ {} ", themed(Tone::Label, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}{}{}{}{}{}",
        border,
        left,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        right,
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    labelled_rule('┌', '┐', label);
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    labelled_rule('├', '┤', label);
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!(
        "{}└{}┘{}",
        paint(Tone::Border),
        "─".repeat(BOX_WIDTH),
        reset()
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded cosine score
pub fn score_value(score: f64) -> String {
    let text = format!("{:.3}", score);
    let tone = if score >= 0.5 {
        Tone::Strong
    } else if score > 0.0 {
        Tone::Medium
    } else {
        Tone::Faint
    };
    themed(tone, &[], &text)
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Truncate to `max` visible characters, marking the cut with `...`.
pub fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Boxed result table for one search.
pub fn print_results(query: &str, domain: &str, results: &[SearchResult]) {
    section_top("SEARCH");
    row(&format!(" query   {}", clip(query, BOX_WIDTH - 10)));
    row(&format!(" domain  {}", clip(domain, BOX_WIDTH - 10)));

    if results.is_empty() {
        section_mid("NO RESULTS");
        row(" the corpus has no documents");
    }

    for (rank, result) in results.iter().enumerate() {
        section_mid(&format!("#{}", rank + 1));
        let score = score_value(result.score);
        let title_width = BOX_WIDTH - 2 - visible_len(&score) - 2;
        let title = themed(Tone::Title, &[BOLD], &clip(&result.title, title_width));
        row(&format!(" {}  {} ", pad_right(&title, title_width), score));
        for line in wrap_text(&result.summary, BOX_WIDTH - 4) {
            row(&format!("   {}", line));
        }
    }
    section_bot();
}

/// Per-domain statistics for a loaded store.
pub fn print_inspect(artifacts: &Path, store: &CorpusStore) {
    section_top("ARTIFACTS");
    row(&format!(
        " directory  {}",
        clip(&artifacts.display().to_string(), BOX_WIDTH - 13)
    ));
    let fallback = store
        .fallback()
        .map_or_else(|| "none (unknown domains rejected)".to_string(), |d| d.to_string());
    row(&format!(" fallback   {}", fallback));

    for (domain, corpus) in store.iter() {
        let matrix = corpus.term_matrix();
        let model = corpus.term_model();
        section_mid(&domain.to_string().to_uppercase());
        row(&format!(" documents   {:>10}", corpus.len()));
        row(&format!(" dimension   {:>10}", model.dimension()));
        row(&format!(" vocabulary  {:>10}", model.vocabulary_len()));
        row(&format!(" non-zeros   {:>10}", matrix.nnz()));
        row(&format!(" density     {:>9.4}%", matrix.density() * 100.0));
        row(&format!(
            " weighting   {:>10}",
            if model.idf().is_some() { "tf-idf" } else { "tf" }
        ));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
