//! Token filter implementations for token transformation.
//!
//! Filters consume a token stream and produce a new one. They can rewrite
//! token text or mark tokens as stopped; a stopped token is left alone by
//! every filter that follows it.
//!
//! # Available Filters
//!
//! - [`normalize::NormalizeFilter`] - Rewrites each token with the symbol normalizer
//! - [`stop::StopFilter`] - Removes (or marks) stop words
//!
//! # Filter Chaining
//!
//! ```text
//! Terms → Normalize → Stop Words → filtered terms
//! ```
//!
//! # Examples
//!
//! ```
//! use stoplist::analysis::token::terms_to_stream;
//! use stoplist::analysis::token_filter::Filter;
//! use stoplist::analysis::token_filter::normalize::NormalizeFilter;
//! use stoplist::analysis::token_filter::stop::StopFilter;
//!
//! let normalized = NormalizeFilter::new().filter(terms_to_stream(vec!["The", "Dog's"]));
//! let kept: Vec<_> = StopFilter::from_words(vec!["the"])
//!     .filter(normalized)
//!     .map(|token| token.text)
//!     .collect();
//!
//! assert_eq!(kept, vec!["dog"]);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use stoplist::analysis::token::{IntoTokenStream, Token, TokenStream};
/// use stoplist::analysis::token_filter::Filter;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> TokenStream {
///         tokens
///             .map(|t| {
///                 let reversed: String = t.text.chars().rev().collect();
///                 t.with_text(reversed)
///             })
///             .collect::<Vec<_>>()
///             .into_token_stream()
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod normalize;
pub mod stop;
