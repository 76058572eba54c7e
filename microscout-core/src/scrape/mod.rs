//! Single-page scraper: one bounded GET, then title/description/h1.
//!
//! Each invocation walks `Idle → Fetching → {Succeeded, HttpError,
//! TimedOut, TransportError}` and maps the terminal state onto a
//! [`ScrapeOutcome`]. Failures are classified, never propagated raw.
//!
//! The deadline covers the whole fetch, body included. When it fires the
//! fetch future is dropped, which aborts the request and releases its
//! connection.

pub mod extract;

use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::http;
use crate::types::{PageMetadata, ScrapeFailure, ScrapeOutcome};

pub use extract::{extract_metadata, ExtractedFields};

/// Terminal state of one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    /// 2xx response, body parsed.
    Succeeded(PageMetadata),
    /// The site answered with this non-2xx status.
    HttpError(u16),
    /// The deadline elapsed first.
    TimedOut,
    /// Anything else the transport reported.
    TransportError(String),
}

impl FetchState {
    /// Returns a stable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Succeeded(_) => "succeeded",
            Self::HttpError(_) => "http_error",
            Self::TimedOut => "timed_out",
            Self::TransportError(_) => "transport_error",
        }
    }
}

impl From<FetchState> for ScrapeOutcome {
    fn from(state: FetchState) -> Self {
        match state {
            FetchState::Succeeded(page) => ScrapeOutcome::Success(page),
            FetchState::HttpError(status) => {
                ScrapeOutcome::Failure(ScrapeFailure::fetch_failed(status))
            }
            FetchState::TimedOut => ScrapeOutcome::Failure(ScrapeFailure::timeout()),
            FetchState::TransportError(_) => {
                ScrapeOutcome::Failure(ScrapeFailure::invalid_input())
            }
        }
    }
}

/// A reusable scraper. Holds a prepared client and its config, nothing
/// mutable, so one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct Scraper {
    client: reqwest::Client,
    config: ScrapeConfig,
}

impl Scraper {
    /// Build a scraper from config.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::Config`] for an invalid config or
    /// [`crate::CoreError::Http`] if the client cannot be built.
    pub fn new(config: ScrapeConfig) -> Result<Self> {
        let client = http::build_client(&config)?;
        Ok(Self { client, config })
    }

    /// Fetch `url` once and extract its metadata.
    ///
    /// Exactly one network attempt; no retries, no caching.
    pub async fn scrape(&self, url: &str) -> ScrapeOutcome {
        let state = self.run(url).await;
        ScrapeOutcome::from(state)
    }

    /// Like [`Scraper::scrape`] but returns the raw terminal state.
    pub async fn run(&self, url: &str) -> FetchState {
        tracing::trace!(url, "scrape start");
        let deadline = self.config.timeout();

        let state = match tokio::time::timeout(deadline, self.fetch(url)).await {
            Ok(state) => state,
            Err(_elapsed) => FetchState::TimedOut,
        };

        match &state {
            FetchState::TransportError(detail) => {
                tracing::debug!(host = %host_of(url), state = state.name(), error = %detail, "scrape finished");
            }
            _ => {
                tracing::debug!(host = %host_of(url), state = state.name(), "scrape finished");
            }
        }
        state
    }

    async fn fetch(&self, url: &str) -> FetchState {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return transport_failure(e),
        };

        let status = response.status();
        if !status.is_success() {
            // Body is left unread; dropping the response closes it.
            return FetchState::HttpError(status.as_u16());
        }

        let html = match read_capped(response, self.config.max_body_bytes).await {
            Ok(html) => html,
            Err(e) => return transport_failure(e),
        };
        tracing::trace!(bytes = html.len(), "scrape response received");

        let fields = extract_metadata(&html);
        FetchState::Succeeded(PageMetadata {
            title: fields.title,
            meta_description: fields.meta_description,
            h1: fields.h1,
            http_status: status.as_u16(),
        })
    }
}

/// Read at most `cap` body bytes. Anything past the cap is left unread and
/// extraction runs on the prefix.
async fn read_capped(
    mut response: reqwest::Response,
    cap: usize,
) -> std::result::Result<String, reqwest::Error> {
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let room = cap - body.len();
        if chunk.len() > room {
            body.extend_from_slice(&chunk[..room]);
            tracing::debug!(cap, "scrape body truncated at cap");
            break;
        }
        body.extend_from_slice(&chunk);
    }
    Ok(String::from_utf8_lossy(&body).into_owned())
}

fn transport_failure(e: reqwest::Error) -> FetchState {
    if e.is_timeout() {
        FetchState::TimedOut
    } else {
        FetchState::TransportError(e.to_string())
    }
}

/// Host portion of a URL for log fields; the full URL stays at trace level.
fn host_of(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_default()
}

/// Scrape with an explicit config.
///
/// # Errors
///
/// Only configuration problems are errors; every fetch result, including
/// failures, is an `Ok` outcome.
pub async fn scrape_with_config(url: &str, config: &ScrapeConfig) -> Result<ScrapeOutcome> {
    let scraper = Scraper::new(config.clone())?;
    Ok(scraper.scrape(url).await)
}

/// Scrape with the default 20 second deadline and identifying User-Agent.
pub async fn scrape(url: &str) -> ScrapeOutcome {
    match Scraper::new(ScrapeConfig::default()) {
        Ok(scraper) => scraper.scrape(url).await,
        Err(e) => {
            tracing::warn!(error = %e, "scraper construction failed");
            ScrapeOutcome::Failure(ScrapeFailure::invalid_input())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScrapeErrorKind;

    fn page() -> PageMetadata {
        PageMetadata {
            title: "Hello".into(),
            meta_description: "World".into(),
            h1: "Hi".into(),
            http_status: 200,
        }
    }

    #[test]
    fn succeeded_maps_to_success() {
        let outcome = ScrapeOutcome::from(FetchState::Succeeded(page()));
        assert_eq!(outcome, ScrapeOutcome::Success(page()));
    }

    #[test]
    fn http_error_maps_to_fetch_failed() {
        let ScrapeOutcome::Failure(failure) = ScrapeOutcome::from(FetchState::HttpError(404)) else {
            panic!("expected failure");
        };
        assert_eq!(failure.kind, ScrapeErrorKind::FetchFailed);
        assert_eq!(failure.http_status, 404);
        assert_eq!(failure.message, "Failed to fetch page. Status: 404");
    }

    #[test]
    fn timed_out_maps_to_504() {
        let outcome = ScrapeOutcome::from(FetchState::TimedOut);
        assert_eq!(outcome, ScrapeOutcome::Failure(ScrapeFailure::timeout()));
    }

    #[test]
    fn transport_error_maps_to_400() {
        let outcome = ScrapeOutcome::from(FetchState::TransportError("dns".into()));
        assert_eq!(outcome, ScrapeOutcome::Failure(ScrapeFailure::invalid_input()));
    }

    #[test]
    fn state_names_are_stable() {
        assert_eq!(FetchState::Succeeded(page()).name(), "succeeded");
        assert_eq!(FetchState::HttpError(500).name(), "http_error");
        assert_eq!(FetchState::TimedOut.name(), "timed_out");
        assert_eq!(FetchState::TransportError(String::new()).name(), "transport_error");
    }

    #[test]
    fn host_of_extracts_host() {
        assert_eq!(host_of("https://example.com/a?b=c"), "example.com");
        assert_eq!(host_of("not a url"), "");
    }

    #[test]
    fn scraper_rejects_invalid_config() {
        let config = ScrapeConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(Scraper::new(config).is_err());
    }

    #[tokio::test]
    async fn unparsable_url_is_invalid_input() {
        let outcome = scrape("not a url").await;
        assert_eq!(outcome, ScrapeOutcome::Failure(ScrapeFailure::invalid_input()));
    }

    #[tokio::test]
    async fn unsupported_scheme_is_invalid_input() {
        let outcome = scrape("ftp://example.com/file").await;
        assert_eq!(outcome.http_status(), 400);
    }

    #[tokio::test]
    async fn scrape_with_config_surfaces_config_errors() {
        let config = ScrapeConfig {
            user_agent: String::new(),
            ..Default::default()
        };
        let result = scrape_with_config("https://example.com", &config).await;
        assert!(result.is_err());
    }
}
