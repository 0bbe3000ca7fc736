//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split raw document text into tokens. Most of this crate works on
//! term lists that were tokenized elsewhere; the frequency-based stop-word
//! deriver is the one consumer that tokenizes raw text itself.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//!
//! # Examples
//!
//! ```
//! use stoplist::analysis::tokenizer::Tokenizer;
//! use stoplist::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use stoplist::analysis::token::{IntoTokenStream, Token, TokenStream};
/// use stoplist::analysis::tokenizer::Tokenizer;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> TokenStream {
///         text.split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect::<Vec<_>>()
///             .into_token_stream()
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
///
/// let tokens: Vec<_> = CommaTokenizer.tokenize("a, b").collect();
/// assert_eq!(tokens[1].text, "b");
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;
