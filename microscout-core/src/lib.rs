//! # microscout-core
//!
//! Two small, independent engines:
//!
//! - **search**: ranks FAQ records by literal, case-insensitive substring
//!   matches (title hit = 2, body hit = 1), keeps the top 3, and builds a
//!   naive extractive summary with source ids.
//! - **scrape**: fetches one URL with a single bounded GET and extracts the
//!   page title, meta description, and first `<h1>`.
//!
//! ## Design
//!
//! - Neither engine holds state between calls
//! - Search is pure and synchronous; scrape has one suspension point
//! - "No matches" and "upstream failed" are return values, not errors
//! - FAQ data is decoded strictly, so engines only see well-formed records
//!
//! ## Privacy
//!
//! - Queries and full URLs are logged only at trace level
//! - No page content is cached or persisted

pub mod config;
pub mod error;
pub mod http;
pub mod records;
pub mod scrape;
pub mod search;
pub mod types;

pub use config::ScrapeConfig;
pub use error::{CoreError, Result};
pub use records::parse_records;
pub use scrape::{scrape, scrape_with_config, Scraper};
pub use search::{search, search_with_summary, summarize, MAX_RESULTS};
pub use types::{
    FaqRecord, PageMetadata, ScoredRecord, ScrapeErrorKind, ScrapeFailure, ScrapeOutcome,
    SearchOutcome, Summary,
};
