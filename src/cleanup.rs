//! Stop-word removal over terms, term lists and collections.
//!
//! Typical flow: build a stop-word list with
//! [`crate::stopwords::load_stop_word_list`] or
//! [`crate::stopwords::create_stop_word_list_by_frequency`], then run
//! [`filter_collection`] to give every document its `filtered_terms`.
//!
//! # Examples
//!
//! ```
//! use stoplist::cleanup::{filter_collection, filter_term_list, is_stop_word};
//! use stoplist::document::Document;
//!
//! assert!(is_stop_word("THE", &["the", "a"]));
//! assert!(!is_stop_word("the", &["THE"]));
//!
//! assert_eq!(filter_term_list(&["The", "dog's", "bone"], &["the"]), vec!["dog", "bone"]);
//!
//! let mut collection = vec![Document::from_raw_text(0, "Fable", "The fox's tail.")];
//! filter_collection(&mut collection, &["the"]);
//! assert_eq!(collection[0].filtered_terms, vec!["fox", "tail"]);
//! ```

use log::trace;

use crate::analysis::token::terms_to_stream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::normalize::NormalizeFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::document::CorpusDocument;

pub use crate::analysis::normalizer::normalize as remove_symbols;
pub use crate::stopwords::{
    create_stop_word_list_by_frequency, derive_stop_words, load_stop_word_list,
};

/// Check whether `term` is a stop word.
///
/// The term is lowercased, the list entries are compared as they are. A list
/// holding uppercase entries never matches; lists read by
/// [`load_stop_word_list`] are lowercase already.
pub fn is_stop_word<S: AsRef<str>>(term: &str, stop_words: &[S]) -> bool {
    let term = term.to_lowercase();
    stop_words.iter().any(|word| word.as_ref() == term)
}

/// Normalize each term and drop the ones that are stop words.
///
/// Each list element is normalized as a whole unit and the *normalized* terms
/// are returned, in input order, duplicates kept. Terms that normalize to the
/// empty string are kept unless `""` is itself a stop word.
pub fn filter_term_list<T, S>(terms: &[T], stop_words: &[S]) -> Vec<String>
where
    T: AsRef<str>,
    S: AsRef<str>,
{
    let filter = StopFilter::from_words(stop_words.iter().map(|w| w.as_ref().to_owned()));
    filter_terms_with(&filter, terms)
}

/// [`filter_term_list`] with a prebuilt [`StopFilter`].
pub fn filter_terms_with<T: AsRef<str>>(filter: &StopFilter, terms: &[T]) -> Vec<String> {
    let tokens = terms_to_stream(terms.iter().map(|t| t.as_ref().to_owned()));
    let normalized = NormalizeFilter::new().filter(tokens);
    filter.filter(normalized).map(|token| token.text).collect()
}

/// For each term, whether its normalized form is a stop word.
///
/// ```
/// use stoplist::cleanup::stop_word_mask;
///
/// assert_eq!(stop_word_mask(&["The", "Fox", "and"], &["the", "and"]), vec![true, false, true]);
/// ```
pub fn stop_word_mask<T, S>(terms: &[T], stop_words: &[S]) -> Vec<bool>
where
    T: AsRef<str>,
    S: AsRef<str>,
{
    let filter = StopFilter::from_words(stop_words.iter().map(|w| w.as_ref().to_owned()))
        .remove_stopped(false);
    let tokens = terms_to_stream(terms.iter().map(|t| t.as_ref().to_owned()));
    let normalized = NormalizeFilter::new().filter(tokens);
    filter.filter(normalized).map(|token| token.is_stopped()).collect()
}

/// Write the stop-word-filtered term list of every document to its
/// `filtered_terms`. Raw text and terms are left untouched.
pub fn filter_collection<'a, D, I, S>(collection: I, stop_words: &[S])
where
    D: CorpusDocument + 'a,
    I: IntoIterator<Item = &'a mut D>,
    S: AsRef<str>,
{
    let filter = StopFilter::from_words(stop_words.iter().map(|w| w.as_ref().to_owned()));
    filter_collection_with(collection, &filter);
}

/// [`filter_collection`] with a prebuilt [`StopFilter`].
pub fn filter_collection_with<'a, D, I>(collection: I, filter: &StopFilter)
where
    D: CorpusDocument + 'a,
    I: IntoIterator<Item = &'a mut D>,
{
    for (index, document) in collection.into_iter().enumerate() {
        let filtered_terms = filter_terms_with(filter, document.terms());
        trace!(
            "Document {index}: kept {} of {} terms",
            filtered_terms.len(),
            document.terms().len()
        );
        document.set_filtered_terms(filtered_terms);
    }
}
