use crate::document::{Document, DocumentId, DocumentStatus, DocumentStore};
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::query::{parse_query, Query};
use crate::ranking::rank_top;
use crate::stop_words::StopWords;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// In-memory TF-IDF search over short status-tagged documents.
///
/// Stop words only apply to documents added after they are configured.
#[derive(Debug, Default, Clone)]
pub struct SearchServer {
    stop_words: StopWords,
    index: InvertedIndex,
    documents: DocumentStore,
}

impl SearchServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop_words(text: &str) -> Self {
        let mut server = Self::new();
        server.set_stop_words(text);
        server
    }

    pub fn set_stop_words(&mut self, text: &str) {
        self.stop_words.configure(text);
    }

    /// Index a document. A text with no words left after stop-word removal is
    /// dropped without recording anything.
    ///
    /// Ids are not checked for uniqueness: adding an id twice counts it twice
    /// and accumulates its term frequencies.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) {
        let words = self.stop_words.split_no_stop(text);
        if words.is_empty() {
            debug!(id, "document has no indexable words, dropped");
            return;
        }
        self.documents.insert(id, status, ratings);
        self.index.add_document(id, &words);
        debug!(
            id,
            words = words.len(),
            num_docs = self.index.num_docs(),
            "indexed document"
        );
    }

    pub fn document_count(&self) -> usize {
        self.index.num_docs()
    }

    /// Plus-words of the query found in the document, in sorted order, and
    /// the document's status. Any matching minus-word empties the word list.
    pub fn match_document(
        &self,
        raw_query: &str,
        id: DocumentId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let status = self.documents.status_of(id)?;
        let query = parse_query(raw_query, &self.stop_words);
        if query.minus_words.iter().any(|w| self.index.contains(w, id)) {
            return Ok((Vec::new(), status));
        }
        let words = query
            .plus_words
            .into_iter()
            .filter(|w| self.index.contains(w, id))
            .collect();
        Ok((words, status))
    }

    /// Top documents with status `ACTUAL`.
    pub fn find_top_documents(&self, raw_query: &str) -> Vec<Document> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Actual)
    }

    pub fn find_top_documents_by_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Vec<Document> {
        self.find_top_documents_with(raw_query, |_, doc_status, _| doc_status == status)
    }

    /// Top documents among those accepted by `keep(id, status, rating)`.
    pub fn find_top_documents_with<F>(&self, raw_query: &str, keep: F) -> Vec<Document>
    where
        F: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        let query = parse_query(raw_query, &self.stop_words);
        rank_top(self.find_all_documents(&query, keep))
    }

    /// Unranked TF-IDF hits for a parsed query.
    ///
    /// Minus-words are applied after scoring and remove documents regardless
    /// of what `keep` decided.
    pub fn find_all_documents<F>(&self, query: &Query, keep: F) -> Vec<Document>
    where
        F: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        let mut relevance: BTreeMap<DocumentId, f64> = BTreeMap::new();
        for word in &query.plus_words {
            let (Some(postings), Some(idf)) = (self.index.postings(word), self.index.idf(word))
            else {
                continue;
            };
            for (&id, &tf) in postings {
                let Ok(meta) = self.documents.get(id) else {
                    continue;
                };
                if keep(id, meta.status, meta.rating) {
                    *relevance.entry(id).or_insert(0.0) += tf * idf;
                }
            }
        }

        for word in &query.minus_words {
            if let Some(postings) = self.index.postings(word) {
                for id in postings.keys() {
                    relevance.remove(id);
                }
            }
        }

        let hits: Vec<Document> = relevance
            .into_iter()
            .filter_map(|(id, relevance)| {
                let rating = self.documents.rating_of(id).ok()?;
                Some(Document { id, relevance, rating })
            })
            .collect();
        trace!(
            plus = query.plus_words.len(),
            minus = query.minus_words.len(),
            hits = hits.len(),
            "scored query"
        );
        hits
    }

    /// Term frequency of every indexed word of a document. Empty for ids that
    /// were never indexed.
    pub fn word_frequencies(&self, id: DocumentId) -> BTreeMap<&str, f64> {
        self.index.word_frequencies(id)
    }
}
