//! Core types for FAQ search results and scrape outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry in the FAQ corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    /// Unique, stable identifier.
    pub id: String,
    /// Question-like headline.
    pub title: String,
    /// Answer text. The summary is excerpted from here.
    pub body: String,
}

/// A [`FaqRecord`] that matched a query, with its relevance score.
///
/// Serializes flat: `{id, title, body, score}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: FaqRecord,
    /// Sum of per-field contributions. Never recomputed after ranking.
    pub score: u32,
}

/// Extractive summary of a ranked result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub summary: String,
    /// Ids of the records the summary was built from, in the same order.
    pub sources: Vec<String>,
}

/// Ranked results plus their summary. `summary` and `sources` are empty
/// whenever `results` is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub results: Vec<ScoredRecord>,
    pub summary: String,
    pub sources: Vec<String>,
}

/// Metadata pulled out of a successfully fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub meta_description: String,
    pub h1: String,
    /// The 2xx status the page was served with.
    #[serde(rename = "status")]
    pub http_status: u16,
}

/// Why a scrape did not produce [`PageMetadata`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrapeErrorKind {
    /// The site answered with a non-2xx status.
    FetchFailed,
    /// No complete response within the deadline.
    Timeout,
    /// Any other transport failure: bad URL, DNS, refused connection, TLS.
    InvalidInput,
}

impl ScrapeErrorKind {
    /// Returns a stable identifier for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchFailed => "fetch_failed",
            Self::Timeout => "timeout",
            Self::InvalidInput => "invalid_input",
        }
    }
}

impl fmt::Display for ScrapeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified scrape failure with the status and message shown to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeFailure {
    pub http_status: u16,
    pub kind: ScrapeErrorKind,
    pub message: String,
}

impl ScrapeFailure {
    /// The site responded, but with a non-2xx status.
    pub fn fetch_failed(status: u16) -> Self {
        Self {
            http_status: status,
            kind: ScrapeErrorKind::FetchFailed,
            message: format!("Failed to fetch page. Status: {status}"),
        }
    }

    /// The deadline elapsed before the response completed.
    pub fn timeout() -> Self {
        Self {
            http_status: 504,
            kind: ScrapeErrorKind::Timeout,
            message: "Timeout".to_owned(),
        }
    }

    /// Transport failure other than a timeout.
    pub fn invalid_input() -> Self {
        Self {
            http_status: 400,
            kind: ScrapeErrorKind::InvalidInput,
            message: "Invalid URL or network error".to_owned(),
        }
    }
}

/// Result of one scrape invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrapeOutcome {
    Success(PageMetadata),
    Failure(ScrapeFailure),
}

impl ScrapeOutcome {
    /// The HTTP status associated with this outcome.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Success(page) => page.http_status,
            Self::Failure(failure) => failure.http_status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
