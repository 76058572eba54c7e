//! HTTP client construction for page scraping.
//!
//! The client always identifies itself with the configured User-Agent.
//! The deadline is not set here: [`crate::scrape`] races the whole fetch
//! against a timer so the body read is covered too.

use crate::config::ScrapeConfig;
use crate::error::CoreError;

/// Build a [`reqwest::Client`] configured for scraping.
///
/// The client has:
/// - The User-Agent from config
/// - Brotli and gzip decompression
/// - The transport's default redirect handling
///
/// # Errors
///
/// Returns [`CoreError::Config`] if the config is invalid, or
/// [`CoreError::Http`] if the client cannot be constructed.
pub fn build_client(config: &ScrapeConfig) -> Result<reqwest::Client, CoreError> {
    config.validate()?;

    reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| CoreError::Http(format!("failed to build HTTP client: {e}")))
}
