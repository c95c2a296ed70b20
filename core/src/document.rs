use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub type DocumentId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    #[default]
    #[serde(alias = "actual")]
    Actual,
    #[serde(alias = "irrelevant")]
    Irrelevant,
    #[serde(alias = "banned")]
    Banned,
    #[serde(alias = "removed")]
    Removed,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentStatus::Actual => "ACTUAL",
            DocumentStatus::Irrelevant => "IRRELEVANT",
            DocumentStatus::Banned => "BANNED",
            DocumentStatus::Removed => "REMOVED",
        };
        f.write_str(name)
    }
}

impl FromStr for DocumentStatus {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ACTUAL" => Ok(DocumentStatus::Actual),
            "IRRELEVANT" => Ok(DocumentStatus::Irrelevant),
            "BANNED" => Ok(DocumentStatus::Banned),
            "REMOVED" => Ok(DocumentStatus::Removed),
            _ => Err(SearchError::UnknownStatus(s.to_string())),
        }
    }
}

/// A ranked search hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Document {
    pub id: DocumentId,
    pub relevance: f64,
    pub rating: i32,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id,
            format_significant(self.relevance),
            self.rating
        )
    }
}

const SIGNIFICANT_DIGITS: i32 = 6;

/// Shortest of fixed or scientific notation with six significant digits and
/// trailing zeros removed, e.g. `0.866434`, `1e-07`, `1.23457e+06`.
fn format_significant(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };
    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocMeta {
    pub status: DocumentStatus,
    pub rating: i32,
}

/// Integer mean of the ratings, truncated toward zero; 0 for no ratings.
pub fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    (sum / ratings.len() as i64) as i32
}

/// Per-document metadata, recorded once when a document is indexed.
#[derive(Debug, Default, Clone)]
pub struct DocumentStore {
    docs: HashMap<DocumentId, DocMeta>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record status and average rating. Re-inserting an id keeps the first
    /// status and replaces the rating.
    pub fn insert(&mut self, id: DocumentId, status: DocumentStatus, ratings: &[i32]) {
        let rating = compute_average_rating(ratings);
        self.docs
            .entry(id)
            .and_modify(|meta| meta.rating = rating)
            .or_insert(DocMeta { status, rating });
    }

    pub fn get(&self, id: DocumentId) -> Result<&DocMeta> {
        self.docs.get(&id).ok_or(SearchError::DocumentNotFound(id))
    }

    pub fn status_of(&self, id: DocumentId) -> Result<DocumentStatus> {
        self.get(id).map(|meta| meta.status)
    }

    pub fn rating_of(&self, id: DocumentId) -> Result<i32> {
        self.get(id).map(|meta| meta.rating)
    }
}
