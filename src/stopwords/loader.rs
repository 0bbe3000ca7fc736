//! Stop-word file loader.
//!
//! A stop-word file is plain UTF-8 text with one stop word per line, no header
//! and no comments. Each line is trimmed and lowercased. Blank lines are kept
//! as empty strings, so the returned list lines up with the file line by line.

use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::Result;

/// Load a newline-delimited stop-word file.
///
/// Fails with [`crate::error::StoplistError::Io`] if the file cannot be
/// opened or read, or is not valid UTF-8 (`ErrorKind::InvalidData`).
///
/// # Examples
///
/// ```no_run
/// use stoplist::stopwords::loader::load_stop_word_list;
///
/// let stop_words = load_stop_word_list("raw_data/englishST.txt")?;
/// # Ok::<(), stoplist::error::StoplistError>(())
/// ```
pub fn load_stop_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let stop_words = parse_stop_word_list(&content);
    debug!(
        "Loaded {} stop word entries from {}",
        stop_words.len(),
        path.display()
    );
    Ok(stop_words)
}

/// Read a stop-word list from any reader.
pub fn read_stop_word_list<R: Read>(mut reader: R) -> Result<Vec<String>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(parse_stop_word_list(&content))
}

/// Parse stop-word file content, one entry per line.
///
/// ```
/// use stoplist::stopwords::loader::parse_stop_word_list;
///
/// let words = parse_stop_word_list(" The \r\n\nAND\n");
/// assert_eq!(words, vec!["the", "", "and"]);
/// ```
pub fn parse_stop_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .collect()
}
