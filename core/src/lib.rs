//! In-memory document search: space-separated tokenization, stop words,
//! an inverted index of normalized term frequencies, and TF-IDF ranking
//! with minus-word exclusion and caller-supplied filters.

pub mod document;
pub mod error;
pub mod index;
pub mod query;
pub mod ranking;
pub mod server;
pub mod stop_words;
pub mod tokenizer;

pub use document::{Document, DocumentId, DocumentStatus};
pub use error::{Result, SearchError};
pub use ranking::{EPSILON, MAX_RESULT_DOCUMENT_COUNT};
pub use server::SearchServer;
