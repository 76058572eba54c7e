//! Literal substring scoring for FAQ records.
//!
//! Assigns scores based on where the query occurs:
//! - Title containment contributes [`TITLE_WEIGHT`]
//! - Body containment contributes [`BODY_WEIGHT`]
//!
//! Formula: `score = title_hit * 2 + body_hit * 1`
//!
//! Matching is a case-insensitive substring test. It is not tokenized and
//! not fuzzy: `"base perf"` matches `"database performance"`.

use crate::types::{FaqRecord, ScoredRecord};

/// Contribution when the query occurs anywhere in the title.
pub const TITLE_WEIGHT: u32 = 2;

/// Contribution when the query occurs anywhere in the body.
pub const BODY_WEIGHT: u32 = 1;

/// Lowercase a query once so it can be reused across records.
pub fn normalise_query(query: &str) -> String {
    query.to_lowercase()
}

/// Calculate the score of one record against an already-lowercased query.
///
/// # Scoring Formula
///
/// ```text
/// score = (title contains q ? 2 : 0) + (body contains q ? 1 : 0)
/// ```
///
/// Returns 0 when neither field contains the query.
pub fn score_record(query_lower: &str, record: &FaqRecord) -> u32 {
    let title_score = if record.title.to_lowercase().contains(query_lower) {
        TITLE_WEIGHT
    } else {
        0
    };
    let body_score = if record.body.to_lowercase().contains(query_lower) {
        BODY_WEIGHT
    } else {
        0
    };
    title_score + body_score
}

/// Score every record, dropping the ones that do not match at all.
///
/// Input order is preserved so a later stable sort keeps first-seen ties.
pub fn score_records(query: &str, records: &[FaqRecord]) -> Vec<ScoredRecord> {
    let q = normalise_query(query);
    records
        .iter()
        .filter_map(|record| {
            let score = score_record(&q, record);
            (score > 0).then(|| ScoredRecord {
                record: record.clone(),
                score,
            })
        })
        .collect()
}
