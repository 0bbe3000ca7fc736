//! Document types consumed by the stop-word operations.
//!
//! Documents come from elsewhere (an extractor, a JSON collection, an
//! application's own structs). The operations in this crate only need the raw
//! text, the pre-tokenized term list, and a place to write the filtered terms
//! back; [`CorpusDocument`] captures exactly that. [`Document`] is a ready-made
//! implementation.
//!
//! # Examples
//!
//! ```
//! use stoplist::document::{CorpusDocument, Document};
//!
//! let doc = Document::from_raw_text(0, "The Fox", "The fox's  tail");
//! assert_eq!(doc.terms(), ["The", "fox's", "tail"]);
//! assert_eq!(doc.raw_text(), Some("The fox's  tail"));
//! assert!(doc.filtered_terms.is_empty());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the stop-word operations need from a document.
pub trait CorpusDocument {
    /// The raw text, if the document has any.
    fn raw_text(&self) -> Option<&str>;

    /// The ordered term list produced by an upstream tokenizer.
    fn terms(&self) -> &[String];

    /// Store the stop-word-filtered term list.
    fn set_filtered_terms(&mut self, filtered_terms: Vec<String>);
}

/// A document of a collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier, unique within its collection.
    #[serde(alias = "document_id")]
    pub id: usize,

    /// Human readable title.
    #[serde(default)]
    pub title: String,

    /// The raw text, absent for documents that only carry terms.
    #[serde(default)]
    pub raw_text: Option<String>,

    /// Ordered terms, tokenized elsewhere.
    #[serde(default)]
    pub terms: Vec<String>,

    /// Terms left after stop-word filtering. Written by
    /// [`crate::cleanup::filter_collection`].
    #[serde(default)]
    pub filtered_terms: Vec<String>,
}

impl Document {
    /// Create an empty document.
    pub fn new(id: usize) -> Self {
        Document {
            id,
            ..Default::default()
        }
    }

    /// Create a document from raw text, splitting it on whitespace into terms.
    pub fn from_raw_text<T, S>(id: usize, title: T, raw_text: S) -> Self
    where
        T: Into<String>,
        S: Into<String>,
    {
        let raw_text = raw_text.into();
        let terms = raw_text.split_whitespace().map(str::to_owned).collect();
        Document {
            id,
            title: title.into(),
            raw_text: Some(raw_text),
            terms,
            filtered_terms: Vec::new(),
        }
    }

    /// Set the title.
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// Set the raw text, leaving the term list as it is.
    pub fn with_raw_text<S: Into<String>>(mut self, raw_text: S) -> Self {
        self.raw_text = Some(raw_text.into());
        self
    }

    /// Set the term list.
    pub fn with_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terms = terms.into_iter().map(Into::into).collect();
        self
    }
}

impl CorpusDocument for Document {
    fn raw_text(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }

    fn terms(&self) -> &[String] {
        &self.terms
    }

    fn set_filtered_terms(&mut self, filtered_terms: Vec<String>) {
        self.filtered_terms = filtered_terms;
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}: {}", self.id, self.title)
    }
}
