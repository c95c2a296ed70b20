use crate::stop_words::StopWords;
use std::collections::BTreeSet;

/// A parsed query. Words are kept in sets, so repeats count once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    /// Stored without the leading `-`.
    pub minus_words: BTreeSet<String>,
}

/// Split a raw query into plus-words and minus-words.
///
/// Stop words are removed before classification, so a stop word only escapes
/// filtering when written with a `-` prefix. A lone `-` is a plus-word.
pub fn parse_query(text: &str, stop_words: &StopWords) -> Query {
    let mut query = Query::default();
    for word in stop_words.split_no_stop(text) {
        match word.strip_prefix('-') {
            Some(minus) if !minus.is_empty() => {
                query.minus_words.insert(minus.to_string());
            }
            _ => {
                query.plus_words.insert(word.to_string());
            }
        }
    }
    query
}
