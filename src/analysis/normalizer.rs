//! Symbol normalizer.
//!
//! Turns free text into the canonical form terms are compared in: word
//! characters separated by single spaces, possessive markers removed, all
//! lowercase.
//!
//! The rewrite runs as a fixed chain of regex replacements:
//!
//! 1. delete every character that is not a word character, whitespace or `'`
//! 2. collapse whitespace runs to one space
//! 3. delete `'s` (either case)
//! 4. delete any apostrophe still left
//! 5. collapse whitespace again, trim, lowercase
//!
//! Word characters follow the Unicode definition of the `regex` crate, so
//! `"Café"` stays `"café"`.
//!
//! # Examples
//!
//! ```
//! use stoplist::analysis::normalizer::normalize;
//!
//! assert_eq!(normalize("  Hello,   World!!  "), "hello world");
//! assert_eq!(normalize("dog's bone"), "dog bone");
//! assert_eq!(normalize(""), "");
//! ```

use std::sync::LazyLock;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;

static SYMBOLS: LazyLock<PatternReplaceCharFilter> = LazyLock::new(|| {
    PatternReplaceCharFilter::new(r"[^\w\s']", "").expect("symbol pattern is valid")
});

static WHITESPACE: LazyLock<PatternReplaceCharFilter> = LazyLock::new(|| {
    PatternReplaceCharFilter::new(r"\s+", " ").expect("whitespace pattern is valid")
});

static POSSESSIVE: LazyLock<PatternReplaceCharFilter> = LazyLock::new(|| {
    PatternReplaceCharFilter::new(r"'[sS]", "").expect("possessive pattern is valid")
});

static APOSTROPHE: LazyLock<PatternReplaceCharFilter> = LazyLock::new(|| {
    PatternReplaceCharFilter::new(r"'", "").expect("apostrophe pattern is valid")
});

/// Char filter that strips symbols and possessives and folds case.
///
/// The output only contains word characters and single spaces, never starts
/// or ends with a space, and normalizing it again returns it unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct SymbolNormalizer;

impl SymbolNormalizer {
    /// Create a new symbol normalizer.
    pub fn new() -> Self {
        SymbolNormalizer
    }

    /// Normalize `text`.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let stripped = SYMBOLS.filter(text);
        let collapsed = WHITESPACE.filter(&stripped);
        let without_possessive = POSSESSIVE.filter(&collapsed);
        let without_apostrophe = APOSTROPHE.filter(&without_possessive);

        WHITESPACE
            .filter(&without_apostrophe)
            .trim()
            .to_lowercase()
    }
}

impl CharFilter for SymbolNormalizer {
    fn filter(&self, input: &str) -> String {
        self.normalize(input)
    }

    fn name(&self) -> &'static str {
        "symbol_normalizer"
    }
}

/// Normalize free text with the default [`SymbolNormalizer`].
pub fn normalize(text: &str) -> String {
    SymbolNormalizer.normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_word_chars_and_spaces(s: &str) -> bool {
        s.chars()
            .all(|c| c == ' ' || c == '_' || c.is_alphanumeric() || !c.is_ascii())
    }

    #[test]
    fn test_punctuation_and_whitespace() {
        assert_eq!(normalize("  Hello,   World!!  "), "hello world");
        assert_eq!(normalize("a\t\tb\nc"), "a b c");
    }

    #[test]
    fn test_possessive() {
        assert_eq!(normalize("dog's bone"), "dog bone");
        assert_eq!(normalize("DOG'S"), "dog");
        assert_eq!(normalize("The fox's tail's tip"), "the fox tail tip");
    }

    #[test]
    fn test_stray_apostrophes() {
        assert_eq!(normalize("rock 'n' roll"), "rock n roll");
        assert_eq!(normalize("dogs'"), "dogs");
        assert_eq!(normalize("dog 's bone"), "dog bone");
    }

    #[test]
    fn test_possessive_behind_punctuation() {
        assert_eq!(normalize("dog.'s"), "dog");
        assert_eq!(normalize("dog'.s"), "dog");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("?!,.;"), "");
        assert_eq!(normalize("'"), "");
    }

    #[test]
    fn test_digits_and_underscore_kept() {
        assert_eq!(normalize("Route_66, 1990!"), "route_66 1990");
    }

    #[test]
    fn test_unicode_word_chars_kept() {
        assert_eq!(normalize("Café Müller"), "café müller");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "  Hello,   World!!  ",
            "dog's bone",
            "DOG'S",
            "dog''ss",
            "it's the dogs' bone's end",
            "a - b -- c",
            "\"Quoted\" (text) [here]",
            "Café Müller's",
            "tab\tseparated\nlines",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
            assert!(only_word_chars_and_spaces(&once), "bad chars in {once:?}");
            assert!(!once.contains("'s"));
            assert!(!once.starts_with(' ') && !once.ends_with(' '));
            assert!(!once.contains("  "));
        }
    }

    #[test]
    fn test_char_filter_impl() {
        let filter = SymbolNormalizer::new();
        assert_eq!(CharFilter::filter(&filter, "Hi!"), "hi");
        assert_eq!(filter.name(), "symbol_normalizer");
    }
}
