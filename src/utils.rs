//! Text preprocessing shared by the vectorizer and the formatter.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::canonical_combining_class, UnicodeNormalization};

/// Lowercase and collapse whitespace: `"  Universal\tCOVERAGE "` → `"universal coverage"`.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip diacritics so accented and plain spellings share a token.
///
/// - "café" → "cafe"
/// - "naïve" → "naive"
/// - "ﬁnance" → "finance"
///
/// NFKD-decomposes, then drops every character with a non-zero canonical
/// combining class. Without the `unicode-normalization` feature the input is
/// returned unchanged; `TermModel::new` refuses models that strip accents in
/// such a build.
#[cfg(feature = "unicode-normalization")]
pub fn strip_accents(value: &str) -> String {
    value
        .nfkd()
        .filter(|&c| canonical_combining_class(c) == 0)
        .collect()
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn strip_accents(value: &str) -> String {
    value.to_string()
}

/// Word characters: letters, digits, and underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into maximal runs of word characters, keeping runs of at least
/// `min_len` characters. Case is left alone.
///
/// With `min_len = 2` this matches the conventional `\b\w\w+\b` token pattern:
/// `"a tax-policy, 2024!"` → `["tax", "policy", "2024"]`.
pub fn tokenize(text: &str, min_len: usize) -> Vec<&str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|t| !t.is_empty() && t.chars().count() >= min_len)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_collapses() {
        assert_eq!(normalize("  Universal\tCOVERAGE \n"), "universal coverage");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_tokenize_matches_word_pattern() {
        assert_eq!(
            tokenize("a tax-policy, 2024!", 2),
            vec!["tax", "policy", "2024"]
        );
    }

    #[test]
    fn test_tokenize_keeps_underscores() {
        assert_eq!(tokenize("snake_case word", 2), vec!["snake_case", "word"]);
    }

    #[test]
    fn test_tokenize_min_len_counts_chars_not_bytes() {
        // "é" is two bytes but one character
        assert!(tokenize("é", 2).is_empty());
        assert_eq!(tokenize("éa", 2), vec!["éa"]);
    }

    #[test]
    fn test_tokenize_empty_and_punctuation_only() {
        assert!(tokenize("", 2).is_empty());
        assert!(tokenize("... --- !!!", 1).is_empty());
    }

    #[cfg(feature = "unicode-normalization")]
    #[test]
    fn test_strip_accents() {
        assert_eq!(strip_accents("café"), "cafe");
        assert_eq!(strip_accents("naïve résumé"), "naive resume");
        assert_eq!(strip_accents("plain"), "plain");
    }

    #[cfg(feature = "unicode-normalization")]
    #[test]
    fn test_strip_accents_compatibility_forms() {
        // Ligature and full-width letters fold to ASCII
        assert_eq!(strip_accents("ﬁnance"), "finance");
        assert_eq!(strip_accents("ＮＨＳ"), "NHS");
    }

    #[cfg(feature = "unicode-normalization")]
    #[test]
    fn test_strip_accents_drops_marks_outside_latin_blocks() {
        // Hebrew qamats (U+05B8) and Devanagari nukta (U+093C)
        assert_eq!(strip_accents("\u{05D0}\u{05B8}"), "\u{05D0}");
        assert_eq!(strip_accents("\u{0915}\u{093C}"), "\u{0915}");
        // Vietnamese stacked diacritics
        assert_eq!(strip_accents("Việt"), "Viet");
    }
}
