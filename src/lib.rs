//! # Stoplist
//!
//! Text normalization and stop-word removal for document collections.
//!
//! ## Features
//!
//! - Symbol normalizer: strips punctuation and possessives, collapses
//!   whitespace, lowercases
//! - Stop-word lists loaded from newline-delimited files
//! - Stop-word lists derived from collection term frequencies (Crouch, 1990)
//!   with configurable thresholds
//! - Collection filtering that writes each document's filtered term list
//!
//! ## Example
//!
//! ```
//! use stoplist::prelude::*;
//!
//! let mut collection = vec![
//!     Document::from_raw_text(0, "The Fox", "The fox saw the crow."),
//!     Document::from_raw_text(1, "The Crow", "The crow's cheese fell."),
//! ];
//!
//! let stop_words = create_stop_word_list_by_frequency(&collection);
//! filter_collection(&mut collection, &stop_words);
//! ```

pub mod analysis;
pub mod cleanup;
pub mod document;
pub mod error;
pub mod stopwords;

pub mod prelude {
    pub use crate::analysis::normalizer::normalize;
    pub use crate::analysis::token_filter::stop::{CaseMode, StopFilter};
    pub use crate::cleanup::{filter_collection, filter_term_list, is_stop_word};
    pub use crate::document::{CorpusDocument, Document};
    pub use crate::error::{Result, StoplistError};
    pub use crate::stopwords::{
        CrouchConfig, HighFrequencyThreshold, StopWordSource, TermSource, build_stop_word_list,
        create_stop_word_list_by_frequency, derive_stop_words, load_stop_word_list,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
