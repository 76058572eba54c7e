//! FAQ search: score, filter, stable rank, truncate, summarize.
//!
//! Everything here is a pure function of its arguments. No I/O, no shared
//! state, safe to call concurrently from any context.

pub mod scoring;
pub mod summary;

use crate::types::{FaqRecord, ScoredRecord, SearchOutcome};

pub use scoring::score_record;
pub use summary::summarize;

/// Maximum number of ranked results returned by [`search`].
pub const MAX_RESULTS: usize = 3;

/// Rank FAQ records against a query.
///
/// # Pipeline
///
/// 1. Lowercase the query
/// 2. Score each record (title hit = 2, body hit = 1)
/// 3. Drop records scoring 0
/// 4. Sort by score descending; ties keep input order
/// 5. Truncate to [`MAX_RESULTS`]
///
/// An empty or whitespace query is not rejected here. The empty string is a
/// substring of everything, so callers should validate before calling.
pub fn search(query: &str, records: &[FaqRecord]) -> Vec<ScoredRecord> {
    tracing::trace!(query, candidates = records.len(), "faq search");

    let mut ranked = scoring::score_records(query, records);

    // `sort_by` is stable, so equal scores keep first-seen order.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(MAX_RESULTS);

    tracing::debug!(matches = ranked.len(), "faq search ranked");
    ranked
}

/// Run [`search`] and build the summary from its results.
pub fn search_with_summary(query: &str, records: &[FaqRecord]) -> SearchOutcome {
    let results = search(query, records);
    let summary = summarize(&results);
    SearchOutcome {
        results,
        summary: summary.summary,
        sources: summary.sources,
    }
}
