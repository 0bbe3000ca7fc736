//! Frequency-based stop-word derivation.
//!
//! Derives a stop-word list from the term distribution of a collection after
//! Crouch (1990). Every distinct term is counted twice: how often it occurs
//! over the whole collection (collection frequency) and in how many documents
//! it occurs at least once (document frequency). From the totals three
//! thresholds are computed:
//!
//! ```text
//! low_frequency      = total_words   * low_frequency_ratio    (default ratio 0.01)
//! high_frequency     = total_words   * low_frequency          (default rule)
//!                    | total_words   * r                      (HighFrequencyThreshold::Ratio(r))
//! document_frequency = num_documents * document_ratio         (default ratio 0.9)
//! ```
//!
//! A term is a stop word if its collection frequency is below
//! `low_frequency`, above `high_frequency`, or its document frequency is
//! above `document_frequency`. All thresholds are products, so empty
//! collections and documents without text are safe.
//!
//! The default high-frequency rule scales `total_words` by the already scaled
//! low threshold, which makes it grow with the square of the collection size.
//! [`HighFrequencyThreshold::Ratio`] gives the fixed-fraction variant.
//!
//! # Examples
//!
//! ```
//! use stoplist::document::Document;
//! use stoplist::stopwords::frequency::{CrouchConfig, derive_stop_words};
//!
//! let collection = vec![Document::from_raw_text(0, "", "a a a b")];
//! let stop_words = derive_stop_words(&collection, &CrouchConfig::default());
//!
//! // With a single document every term occurs in more than 90% of documents.
//! assert_eq!(stop_words, vec!["a", "b"]);
//! ```

use ahash::{AHashSet, RandomState};
use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::document::CorpusDocument;
use crate::error::{Result, StoplistError};

/// Where the deriver takes a document's tokens from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermSource {
    /// Split the document's raw text on whitespace. Documents without raw
    /// text contribute no tokens.
    #[default]
    RawText,
    /// Use the document's own term list.
    Terms,
}

/// How the high collection-frequency threshold is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighFrequencyThreshold {
    /// `total_words * low_frequency`.
    #[default]
    ScaledByLowThreshold,
    /// `total_words * ratio`.
    Ratio(f64),
}

/// Configuration for the frequency-based deriver.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrouchConfig {
    /// Fraction of `total_words` below which a term counts as rare.
    pub low_frequency_ratio: f64,

    /// Rule for the threshold above which a term counts as too frequent.
    pub high_frequency: HighFrequencyThreshold,

    /// Fraction of `num_documents` above which a term counts as ubiquitous.
    pub document_ratio: f64,

    /// Token source for each document.
    pub term_source: TermSource,
}

impl Default for CrouchConfig {
    fn default() -> Self {
        CrouchConfig {
            low_frequency_ratio: 0.01,
            high_frequency: HighFrequencyThreshold::ScaledByLowThreshold,
            document_ratio: 0.9,
            term_source: TermSource::RawText,
        }
    }
}

impl CrouchConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use stoplist::stopwords::frequency::{CrouchConfig, HighFrequencyThreshold};
    ///
    /// let config = CrouchConfig::from_json_str(r#"{"high_frequency": {"ratio": 0.05}}"#).unwrap();
    /// assert_eq!(config.high_frequency, HighFrequencyThreshold::Ratio(0.05));
    /// assert_eq!(config.document_ratio, 0.9);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CrouchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the low-frequency ratio.
    pub fn with_low_frequency_ratio(mut self, ratio: f64) -> Self {
        self.low_frequency_ratio = ratio;
        self
    }

    /// Set the high-frequency rule.
    pub fn with_high_frequency(mut self, high_frequency: HighFrequencyThreshold) -> Self {
        self.high_frequency = high_frequency;
        self
    }

    /// Set the document ratio.
    pub fn with_document_ratio(mut self, ratio: f64) -> Self {
        self.document_ratio = ratio;
        self
    }

    /// Set the token source.
    pub fn with_term_source(mut self, term_source: TermSource) -> Self {
        self.term_source = term_source;
        self
    }

    /// Reject ratios that are negative, NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        check_ratio("low_frequency_ratio", self.low_frequency_ratio)?;
        check_ratio("document_ratio", self.document_ratio)?;
        if let HighFrequencyThreshold::Ratio(ratio) = self.high_frequency {
            check_ratio("high_frequency.ratio", ratio)?;
        }
        Ok(())
    }
}

fn check_ratio(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(StoplistError::invalid_config(format!(
            "{name} must be a finite, non-negative number, got {value}"
        )))
    }
}

/// Frequencies of one term.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermStats {
    /// Number of documents containing the term at least once.
    pub document_frequency: usize,
    /// Number of occurrences over the whole collection.
    pub collection_frequency: usize,
}

/// The three cut-offs a term is compared against.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Collection frequencies strictly below this are stop words.
    pub low_frequency: f64,
    /// Collection frequencies strictly above this are stop words.
    pub high_frequency: f64,
    /// Document frequencies strictly above this are stop words.
    pub document_frequency: f64,
}

impl Thresholds {
    /// Compute the thresholds for a collection of the given size.
    pub fn compute(total_words: usize, num_documents: usize, config: &CrouchConfig) -> Self {
        let total_words = total_words as f64;
        let low_frequency = total_words * config.low_frequency_ratio;
        let high_frequency = match config.high_frequency {
            HighFrequencyThreshold::ScaledByLowThreshold => total_words * low_frequency,
            HighFrequencyThreshold::Ratio(ratio) => total_words * ratio,
        };
        let document_frequency = num_documents as f64 * config.document_ratio;

        Thresholds {
            low_frequency,
            high_frequency,
            document_frequency,
        }
    }

    /// Whether a term with these frequencies is a stop word.
    pub fn is_stop_word(&self, stats: &TermStats) -> bool {
        let collection_frequency = stats.collection_frequency as f64;
        collection_frequency < self.low_frequency
            || collection_frequency > self.high_frequency
            || stats.document_frequency as f64 > self.document_frequency
    }
}

/// Per-term document and collection frequencies of a collection.
///
/// Terms are kept in the order they were first seen.
#[derive(Clone, Debug, Default)]
pub struct TermFrequencyTable {
    stats: IndexMap<String, TermStats, RandomState>,
    total_words: usize,
    num_documents: usize,
}

impl TermFrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the documents of a collection.
    pub fn from_collection<'a, D, I>(collection: I, term_source: TermSource) -> Self
    where
        D: CorpusDocument + 'a,
        I: IntoIterator<Item = &'a D>,
    {
        let tokenizer = WhitespaceTokenizer::new();
        let mut table = Self::new();
        for document in collection {
            match term_source {
                TermSource::RawText => {
                    let raw_text = document.raw_text().unwrap_or_default();
                    table.add_document(tokenizer.split(raw_text));
                }
                TermSource::Terms => {
                    table.add_document(document.terms().iter().map(String::as_str));
                }
            }
        }
        table
    }

    /// Count one document given as its sequence of tokens.
    pub fn add_document<'t, I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut seen: AHashSet<&str> = AHashSet::new();
        for token in tokens {
            let first_in_document = seen.insert(token);
            let index = match self.stats.get_index_of(token) {
                Some(index) => index,
                None => {
                    self.stats
                        .insert_full(token.to_owned(), TermStats::default())
                        .0
                }
            };
            let stats = &mut self.stats[index];
            stats.collection_frequency += 1;
            if first_in_document {
                stats.document_frequency += 1;
            }
            self.total_words += 1;
        }
        self.num_documents += 1;
    }

    /// Frequencies of `term`, if it occurs.
    pub fn get(&self, term: &str) -> Option<&TermStats> {
        self.stats.get(term)
    }

    /// Number of documents containing `term`.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.get(term).map_or(0, |stats| stats.document_frequency)
    }

    /// Number of occurrences of `term` over the collection.
    pub fn collection_frequency(&self, term: &str) -> usize {
        self.get(term).map_or(0, |stats| stats.collection_frequency)
    }

    /// Sum of all collection frequencies.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Number of documents counted, including those without tokens.
    pub fn num_documents(&self) -> usize {
        self.num_documents
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Whether no term has been counted.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Iterate terms and their frequencies in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermStats)> {
        self.stats.iter().map(|(term, stats)| (term.as_str(), stats))
    }

    /// Thresholds for this table under `config`.
    pub fn thresholds(&self, config: &CrouchConfig) -> Thresholds {
        Thresholds::compute(self.total_words, self.num_documents, config)
    }

    /// Terms selected by `thresholds`, in first-seen order.
    pub fn stop_words(&self, thresholds: &Thresholds) -> Vec<String> {
        self.iter()
            .filter(|(_, stats)| thresholds.is_stop_word(stats))
            .map(|(term, _)| term.to_owned())
            .collect()
    }
}

/// Derive a stop-word list from a collection.
pub fn derive_stop_words<'a, D, I>(collection: I, config: &CrouchConfig) -> Vec<String>
where
    D: CorpusDocument + 'a,
    I: IntoIterator<Item = &'a D>,
{
    let table = TermFrequencyTable::from_collection(collection, config.term_source);
    let thresholds = table.thresholds(config);
    debug!(
        "Term frequency table: {} distinct terms, {} words, {} documents; thresholds {:?}",
        table.len(),
        table.total_words(),
        table.num_documents(),
        thresholds
    );

    let stop_words = table.stop_words(&thresholds);
    if !stop_words.is_empty() && stop_words.len() == table.len() {
        warn!(
            "Every one of the {} distinct terms was selected as a stop word",
            table.len()
        );
    }
    stop_words
}

/// Derive a stop-word list with the default [`CrouchConfig`].
pub fn create_stop_word_list_by_frequency<'a, D, I>(collection: I) -> Vec<String>
where
    D: CorpusDocument + 'a,
    I: IntoIterator<Item = &'a D>,
{
    derive_stop_words(collection, &CrouchConfig::default())
}
