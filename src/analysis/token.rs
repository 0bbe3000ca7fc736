//! Token types and utilities for text analysis.
//!
//! A [`Token`] is the unit that flows between tokenizers and token filters.
//! Terms enter the pipeline as tokens, filters rewrite or stop them, and the
//! surviving token texts become a document's filtered term list.
//!
//! # Examples
//!
//! ```
//! use stoplist::analysis::token::Token;
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 0);
//! assert!(!token.is_stopped());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single term on its way through the analysis pipeline.
///
/// # Examples
///
/// ```
/// use stoplist::analysis::token::Token;
///
/// let token = Token::new("Dog's", 3).with_text("dog");
/// assert_eq!(token.text, "dog");
/// assert_eq!(token.original_text.as_deref(), Some("Dog's"));
///
/// let token = token.stop();
/// assert!(token.is_stopped());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original term sequence (0-based)
    pub position: usize,

    /// Whether this token has been marked as stopped by a filter
    pub stopped: bool,

    /// The text before the first rewrite, if the token was rewritten
    pub original_text: Option<String>,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            stopped: false,
            original_text: None,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Replace the token text, remembering the first text it carried.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        let text = text.into();
        if self.original_text.is_none() && text != self.text {
            self.original_text = Some(std::mem::replace(&mut self.text, text));
        } else {
            self.text = text;
        }
        self
    }

    /// The text this token entered the pipeline with.
    pub fn original(&self) -> &str {
        self.original_text.as_deref().unwrap_or(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A stream of tokens, as produced by tokenizers and consumed by filters.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

/// Conversion into a [`TokenStream`].
pub trait IntoTokenStream {
    /// Box this collection of tokens as a stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

/// Turn an ordered list of terms into a token stream, one token per term.
pub fn terms_to_stream<I, S>(terms: I) -> TokenStream
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    terms
        .into_iter()
        .enumerate()
        .map(|(position, term)| Token::new(term, position))
        .collect::<Vec<_>>()
        .into_token_stream()
}
