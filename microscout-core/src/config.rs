//! Scrape configuration with sensible defaults.
//!
//! [`ScrapeConfig`] controls the fetch deadline and the identifying
//! User-Agent. The defaults match the public behaviour of the scraper:
//! a 20 second budget and a fixed, honest client name.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Identifying User-Agent sent with every scrape request.
pub const DEFAULT_USER_AGENT: &str = "NextMicroScraper/1.0 (+https://example.com)";

/// Default scrape deadline in seconds, measured from request start.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 20;

/// Default cap on response body bytes read per scrape (2 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Configuration for a scrape operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Whole-request deadline in seconds (response head plus body).
    pub timeout_seconds: u64,
    /// User-Agent header sent with the request.
    pub user_agent: String,
    /// Upper bound on response body bytes read before extraction.
    pub max_body_bytes: usize,
    /// Sub-second deadline override. Not read from config files.
    #[serde(skip)]
    pub timeout_override: Option<Duration>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            timeout_override: None,
        }
    }
}

impl ScrapeConfig {
    /// Replace the deadline with an exact duration.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_override = Some(timeout);
        self
    }

    /// The effective deadline for one scrape.
    pub fn timeout(&self) -> Duration {
        self.timeout_override
            .unwrap_or_else(|| Duration::from_secs(self.timeout_seconds))
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - the effective timeout must be greater than 0
    /// - `user_agent` must not be blank
    /// - `max_body_bytes` must be greater than 0
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.timeout().is_zero() {
            return Err(CoreError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(CoreError::Config("user_agent must not be empty".into()));
        }
        if self.max_body_bytes == 0 {
            return Err(CoreError::Config(
                "max_body_bytes must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
