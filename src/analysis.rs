//! Text analysis module.
//!
//! Building blocks shared by the stop-word operations: the token type, char
//! filters (including the [`normalizer`]), the whitespace tokenizer used by
//! the frequency deriver, and the token filters that turn a term list into a
//! filtered term list.

pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use normalizer::{SymbolNormalizer, normalize};
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
