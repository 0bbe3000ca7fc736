//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};

/// A tokenizer that splits text on runs of whitespace.
///
/// Tokens keep their case and punctuation; nothing but whitespace is removed.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Split `text` without allocating tokens.
    pub fn split<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.split_whitespace()
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        self.split(text)
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect::<Vec<_>>()
            .into_token_stream()
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
