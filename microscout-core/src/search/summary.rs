//! Naive extractive summary over ranked results.
//!
//! Each included record contributes the text of its body up to the first
//! literal `.`. Fragments are joined with `". "` and a final `.` is appended.
//! Abbreviations and decimal numbers split early; that is the contract.

use super::MAX_RESULTS;
use crate::types::{ScoredRecord, Summary};

/// Build a summary and its source ids from ranked results.
///
/// At most [`MAX_RESULTS`] entries are used. An empty body contributes an
/// empty fragment, so the summary can contain adjacent `". "` separators.
pub fn summarize(scored: &[ScoredRecord]) -> Summary {
    if scored.is_empty() {
        return Summary::default();
    }

    let included = &scored[..scored.len().min(MAX_RESULTS)];

    let mut summary = included
        .iter()
        .map(|s| first_sentence(&s.record.body))
        .collect::<Vec<_>>()
        .join(". ");
    summary.push('.');

    let sources = included.iter().map(|s| s.record.id.clone()).collect();

    Summary { summary, sources }
}

/// Text before the first `.`, or the whole body when there is none.
fn first_sentence(body: &str) -> &str {
    body.split('.').next().unwrap_or_default()
}
