//! Char filter implementations for text normalization.
//!
//! Char filters rewrite a whole string before it is tokenized or compared.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`crate::analysis::normalizer::SymbolNormalizer`] - Punctuation, possessive and case folding
//!
//! # Examples
//!
//! ```
//! use stoplist::analysis::char_filter::CharFilter;
//! use stoplist::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"-", "").unwrap();
//! assert_eq!(filter.filter("123-456"), "123456");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the rewritten text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod pattern_replace;
