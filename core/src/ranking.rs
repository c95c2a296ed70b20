use crate::document::Document;

pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Absolute tolerance under which two relevances count as equal.
pub const EPSILON: f64 = 1e-6;

/// Sort hits and keep at most `MAX_RESULT_DOCUMENT_COUNT`.
///
/// Hits are ordered by relevance, then split into runs whose members are all
/// within `EPSILON` of the run's first (most relevant) hit. Each run is ordered
/// by rating, then by relevance, both descending.
pub fn rank_top(mut docs: Vec<Document>) -> Vec<Document> {
    docs.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));

    let mut start = 0;
    while start < docs.len() {
        let head = docs[start].relevance;
        let end = docs[start..]
            .iter()
            .position(|d| head - d.relevance > EPSILON)
            .map_or(docs.len(), |offset| start + offset);
        docs[start..end].sort_by(|a, b| {
            b.rating
                .cmp(&a.rating)
                .then_with(|| b.relevance.total_cmp(&a.relevance))
        });
        start = end;
    }

    docs.truncate(MAX_RESULT_DOCUMENT_COUNT);
    docs
}
