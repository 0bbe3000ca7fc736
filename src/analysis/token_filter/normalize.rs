//! Normalize filter implementation.

use super::Filter;
use crate::analysis::normalizer::SymbolNormalizer;
use crate::analysis::token::{IntoTokenStream, TokenStream};

/// A filter that rewrites every token with [`SymbolNormalizer`].
///
/// Each token is normalized as a whole unit, so a token holding several words
/// stays one token (`"Big, Bad"` becomes `"big bad"`). Tokens that normalize
/// to the empty string are kept.
#[derive(Clone, Debug, Default)]
pub struct NormalizeFilter {
    normalizer: SymbolNormalizer,
}

impl NormalizeFilter {
    /// Create a new normalize filter.
    pub fn new() -> Self {
        NormalizeFilter {
            normalizer: SymbolNormalizer::new(),
        }
    }
}

impl Filter for NormalizeFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let normalized = self.normalizer.normalize(&token.text);
                    token.with_text(normalized)
                }
            })
            .collect::<Vec<_>>()
            .into_token_stream()
    }

    fn name(&self) -> &'static str {
        "normalize"
    }
}
