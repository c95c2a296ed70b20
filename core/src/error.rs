use crate::document::DocumentId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No metadata was recorded for this id: it was never added, or it was
    /// dropped because every word in its text is a stop word.
    #[error("document not found: {0}")]
    DocumentNotFound(DocumentId),

    #[error("unknown document status: {0}")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
