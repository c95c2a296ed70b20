use crate::document::DocumentId;
use std::collections::BTreeMap;

/// Term frequencies of one word, keyed by document id.
pub type Postings = BTreeMap<DocumentId, f64>;

#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    postings: BTreeMap<String, Postings>,
    num_docs: usize,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one document and add `1 / words.len()` per occurrence of each word.
    /// `words` must already be stop-word filtered and non-empty.
    pub fn add_document(&mut self, doc_id: DocumentId, words: &[&str]) {
        debug_assert!(!words.is_empty());
        self.num_docs += 1;
        let tf = 1.0 / words.len() as f64;
        for &word in words {
            *self
                .postings
                .entry(word.to_string())
                .or_default()
                .entry(doc_id)
                .or_insert(0.0) += tf;
        }
    }

    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    pub fn postings(&self, word: &str) -> Option<&Postings> {
        self.postings.get(word)
    }

    pub fn contains(&self, word: &str, doc_id: DocumentId) -> bool {
        self.postings(word).is_some_and(|p| p.contains_key(&doc_id))
    }

    /// ln(N / df). `None` for words that were never indexed.
    pub fn idf(&self, word: &str) -> Option<f64> {
        let df = self.postings(word)?.len();
        Some((self.num_docs as f64 / df as f64).ln())
    }

    /// Every word recorded for `doc_id` with its term frequency.
    pub fn word_frequencies(&self, doc_id: DocumentId) -> BTreeMap<&str, f64> {
        self.postings
            .iter()
            .filter_map(|(word, p)| p.get(&doc_id).map(|&tf| (word.as_str(), tf)))
            .collect()
    }
}
