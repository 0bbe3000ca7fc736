//! Stop-word list sourcing.
//!
//! A stop-word list comes either from a file ([`loader`]) or is derived from
//! the term distribution of a collection ([`frequency`]). [`StopWordSource`]
//! names the two methods so an application can pick one at runtime.

pub mod frequency;
pub mod loader;

use std::path::PathBuf;

use log::info;
use serde::{Deserialize, Serialize};

use crate::document::CorpusDocument;
use crate::error::Result;

pub use frequency::{
    CrouchConfig, HighFrequencyThreshold, TermFrequencyTable, TermSource, TermStats, Thresholds,
    create_stop_word_list_by_frequency, derive_stop_words,
};
pub use loader::{load_stop_word_list, parse_stop_word_list, read_stop_word_list};

/// How to build a stop-word list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopWordSource {
    /// Load a newline-delimited stop-word file.
    File(PathBuf),
    /// Derive the list from collection frequencies.
    Frequency(CrouchConfig),
}

impl Default for StopWordSource {
    fn default() -> Self {
        StopWordSource::Frequency(CrouchConfig::default())
    }
}

/// Build a stop-word list from `source`.
///
/// The collection is only read for [`StopWordSource::Frequency`].
///
/// ```
/// use stoplist::document::Document;
/// use stoplist::stopwords::{StopWordSource, build_stop_word_list};
///
/// let collection = vec![Document::from_raw_text(0, "", "a a b")];
/// let stop_words = build_stop_word_list(&StopWordSource::default(), &collection).unwrap();
/// assert_eq!(stop_words, vec!["a", "b"]);
/// ```
pub fn build_stop_word_list<'a, D, I>(source: &StopWordSource, collection: I) -> Result<Vec<String>>
where
    D: CorpusDocument + 'a,
    I: IntoIterator<Item = &'a D>,
{
    let stop_words = match source {
        StopWordSource::File(path) => load_stop_word_list(path)?,
        StopWordSource::Frequency(config) => derive_stop_words(collection, config),
    };
    info!("Built stop word list with {} entries", stop_words.len());
    Ok(stop_words)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::document::Document;
    use crate::error::StoplistError;

    #[test]
    fn test_build_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "The\nAnd").unwrap();

        let docs: Vec<Document> = Vec::new();
        let source = StopWordSource::File(file.path().to_path_buf());
        let stop_words = build_stop_word_list(&source, &docs).unwrap();

        assert_eq!(stop_words, vec!["the", "and"]);
    }

    #[test]
    fn test_build_from_missing_file() {
        let docs: Vec<Document> = Vec::new();
        let source = StopWordSource::File(PathBuf::from("/nonexistent/stop/words.txt"));

        assert!(matches!(
            build_stop_word_list(&source, &docs),
            Err(StoplistError::Io(_))
        ));
    }

    #[test]
    fn test_build_by_frequency() {
        let docs = vec![
            Document::from_raw_text(0, "", "shared one"),
            Document::from_raw_text(1, "", "shared two"),
        ];
        let source = StopWordSource::Frequency(CrouchConfig::default());

        // total_words = 4, so every term exceeds the high threshold of 0.16.
        assert_eq!(
            build_stop_word_list(&source, &docs).unwrap(),
            vec!["shared", "one", "two"]
        );
    }

    #[test]
    fn test_source_serde() {
        let source: StopWordSource =
            serde_json::from_str(r#"{"file": "raw_data/englishST.txt"}"#).unwrap();
        assert_eq!(
            source,
            StopWordSource::File(PathBuf::from("raw_data/englishST.txt"))
        );

        let source: StopWordSource = serde_json::from_str(r#"{"frequency": {}}"#).unwrap();
        assert_eq!(source, StopWordSource::default());
    }
}
