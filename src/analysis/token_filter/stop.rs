//! Stop filter implementation.
//!
//! This module provides a filter that removes stop words: terms judged too
//! common or too rare to carry retrieval value.
//!
//! Membership is tested with the *lowercased* term against the list entries
//! *as given*. A list that holds `"THE"` therefore never matches anything,
//! while a list holding `"the"` matches `"The"` and `"THE"`. Lists produced by
//! [`crate::stopwords::loader`] are already lowercase. Use
//! [`CaseMode::LowercaseBoth`] to fold the list as well.
//!
//! # Examples
//!
//! ```
//! use stoplist::analysis::token::terms_to_stream;
//! use stoplist::analysis::token_filter::Filter;
//! use stoplist::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::from_words(vec!["the"]);
//! let result: Vec<_> = filter
//!     .filter(terms_to_stream(vec!["the", "quick", "brown"]))
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[1].text, "brown");
//! ```

use std::sync::Arc;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::token_filter::Filter;

/// How case is handled when testing stop-word membership.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    /// Lowercase the term, compare against the list entries unchanged.
    #[default]
    LowercaseTerm,
    /// Lowercase the term and the list entries.
    LowercaseBoth,
}

/// A filter that removes stop words from the token stream.
///
/// # Examples
///
/// ## Preserve Stopped Tokens
///
/// ```
/// use stoplist::analysis::token::terms_to_stream;
/// use stoplist::analysis::token_filter::Filter;
/// use stoplist::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["the"]).remove_stopped(false);
/// let result: Vec<_> = filter.filter(terms_to_stream(vec!["the", "quick"])).collect();
///
/// assert_eq!(result.len(), 2);
/// assert!(result[0].is_stopped());
/// assert!(!result[1].is_stopped());
/// ```
///
/// ## Case Handling
///
/// ```
/// use stoplist::analysis::token_filter::stop::{CaseMode, StopFilter};
///
/// let literal = StopFilter::from_words(vec!["THE"]);
/// assert!(!literal.is_stop_word("the"));
/// assert!(!literal.is_stop_word("THE"));
///
/// let folded = StopFilter::from_words(vec!["THE"]).with_case_mode(CaseMode::LowercaseBoth);
/// assert!(folded.is_stop_word("The"));
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<AHashSet<String>>,
    /// How term and list case are compared
    case_mode: CaseMode,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a new stop filter with the given set of stop words.
    pub fn with_stop_words(stop_words: AHashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            case_mode: CaseMode::default(),
            remove_stopped: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// ```
    /// use stoplist::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz", "foo"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Set how case is compared.
    ///
    /// Switching to [`CaseMode::LowercaseBoth`] lowercases the stored list once.
    pub fn with_case_mode(mut self, case_mode: CaseMode) -> Self {
        if case_mode == CaseMode::LowercaseBoth && self.case_mode != case_mode {
            let folded = self.stop_words.iter().map(|w| w.to_lowercase()).collect();
            self.stop_words = Arc::new(folded);
        }
        self.case_mode = case_mode;
        self
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check if a term is a stop word.
    pub fn is_stop_word(&self, term: &str) -> bool {
        self.stop_words.contains(term.to_lowercase().as_str())
    }

    /// The case mode in use.
    pub fn case_mode(&self) -> CaseMode {
        self.case_mode
    }

    /// Get the number of distinct stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None
                    } else {
                        Some(token.stop())
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        filtered_tokens.into_token_stream()
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::terms_to_stream;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let stream = terms_to_stream(vec!["hello", "the", "world", "and", "test"]);

        let result: Vec<Token> = filter.filter(stream).collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "test");
        assert_eq!(result[2].position, 4);
    }

    #[test]
    fn test_stop_filter_preserve_stopped() {
        let filter = StopFilter::from_words(vec!["the", "and"]).remove_stopped(false);
        let stream = terms_to_stream(vec!["hello", "the", "world"]);

        let result: Vec<Token> = filter.filter(stream).collect();

        assert_eq!(result.len(), 3);
        assert!(!result[0].is_stopped());
        assert!(result[1].is_stopped());
        assert!(!result[2].is_stopped());
    }

    #[test]
    fn test_already_stopped_tokens_pass_through() {
        let filter = StopFilter::from_words(vec!["the"]);
        let tokens = vec![Token::new("the", 0).stop()];

        let result: Vec<Token> = filter.filter(tokens.into_token_stream()).collect();

        assert_eq!(result.len(), 1);
        assert!(result[0].is_stopped());
    }

    #[test]
    fn test_term_is_lowercased_list_is_not() {
        let filter = StopFilter::from_words(vec!["the", "A"]);

        assert!(filter.is_stop_word("the"));
        assert!(filter.is_stop_word("THE"));
        assert!(!filter.is_stop_word("a"));
        assert!(!filter.is_stop_word("A"));
        assert_eq!(filter.case_mode(), CaseMode::LowercaseTerm);
    }

    #[test]
    fn test_lowercase_both() {
        let filter =
            StopFilter::from_words(vec!["the", "A"]).with_case_mode(CaseMode::LowercaseBoth);

        assert!(filter.is_stop_word("a"));
        assert!(filter.is_stop_word("A"));
        assert!(filter.is_stop_word("The"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_empty_string_stop_word() {
        let filter = StopFilter::from_words(vec![""]);
        let result: Vec<Token> = filter.filter(terms_to_stream(vec!["", "x"])).collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "x");
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopFilter::from_words(Vec::<String>::new());
        assert!(filter.is_empty());
        assert_eq!(filter.filter(terms_to_stream(vec!["a", "b"])).count(), 2);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::from_words(vec!["x"]).name(), "stop");
    }
}
