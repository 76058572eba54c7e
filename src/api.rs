//! HTTP boundary: request validation, core invocation, response shaping.
//!
//! Routes:
//! - `POST /api/search` with `{"query": "..."}`
//! - `GET /api/scrape?url=...`
//! - `GET /health`

use crate::config::ServiceConfig;
use crate::error::{ApiError, Result};
use crate::store::{FaqStore, JsonFileStore, StoreError};
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use microscout_core::{search_with_summary, ScrapeOutcome, Scraper, SearchOutcome};
use serde_json::{json, Value};
use std::future::Future;
use std::sync::Arc;

/// Shared handler state. Cheap to clone; holds nothing mutable.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn FaqStore>,
    scraper: Scraper,
}

impl AppState {
    pub fn new(store: Arc<dyn FaqStore>, scraper: Scraper) -> Self {
        Self { store, scraper }
    }

    /// State backed by the configured JSON file and scrape settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        config.validate()?;
        let store = Arc::new(JsonFileStore::new(&config.data_path));
        let scraper = Scraper::new(config.scrape.clone())?;
        Ok(Self::new(store, scraper))
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/search", post(search_handler))
        .route("/api/scrape", get(scrape_handler))
        .with_state(state)
}

/// Bind and serve until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the config is invalid or the listener cannot bind.
pub async fn run_server(
    config: ServiceConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let state = AppState::from_config(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(data = %config.data_path.display(), "microscout listening on http://{local_addr}");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("microscout stopped");
    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Pull a non-empty `query` string out of a search request body.
pub fn validate_query(body: &Value) -> std::result::Result<&str, ApiError> {
    match body.get("query") {
        Some(Value::String(q)) if !q.is_empty() => Ok(q.as_str()),
        Some(Value::String(_)) | Some(Value::Null) | None => {
            Err(ApiError::BadRequest("Query cannot be empty".into()))
        }
        Some(_) => Err(ApiError::BadRequest("Query must be a string".into())),
    }
}

/// Decode a search request body as JSON whatever its `Content-Type`.
pub fn parse_search_body(bytes: &[u8]) -> std::result::Result<Value, ApiError> {
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!(error = %e, "search request rejected");
        ApiError::BadRequest("Invalid request body".into())
    })
}

async fn search_handler(
    State(state): State<AppState>,
    bytes: Bytes,
) -> std::result::Result<Response, ApiError> {
    let body = parse_search_body(&bytes)?;
    let query = validate_query(&body)?;

    let records = state.store.load().await.map_err(|e| match e {
        StoreError::Unavailable(detail) => ApiError::Internal {
            public: "Failed to load data file".into(),
            detail,
        },
        StoreError::Malformed(err) => ApiError::internal(err.to_string()),
    })?;

    let outcome = search_with_summary(query, &records);
    if !outcome.results.is_empty() {
        tracing::debug!(summary = %outcome.summary, sources = ?outcome.sources, "search answered");
    }
    Ok(Json(search_body(&outcome)).into_response())
}

/// Response body for a search outcome.
///
/// Matches carry `results`, `summary`, and `sources`. No matches carry
/// `message` and an empty `results` instead.
pub fn search_body(outcome: &SearchOutcome) -> Value {
    if outcome.results.is_empty() {
        return json!({
            "message": "No matches found",
            "results": [],
        });
    }
    json!({
        "results": outcome.results,
        "summary": outcome.summary,
        "sources": outcome.sources,
    })
}

#[derive(Debug, serde::Deserialize)]
struct ScrapeParams {
    url: Option<String>,
}

/// `^https?://.+` without a regex engine.
pub fn is_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));
    matches!(rest, Some(r) if r.chars().next().is_some_and(|c| !is_line_terminator(c)))
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

async fn scrape_handler(
    State(state): State<AppState>,
    params: std::result::Result<Query<ScrapeParams>, QueryRejection>,
) -> std::result::Result<Response, ApiError> {
    let url = params
        .ok()
        .and_then(|Query(p)| p.url)
        .filter(|u| is_http_url(u))
        .ok_or_else(|| ApiError::BadRequest("Invalid URL".into()))?;

    let outcome = state.scraper.scrape(&url).await;
    let (status, body) = scrape_body(&outcome);
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((status, Json(body)).into_response())
}

/// Response status and body for a scrape outcome.
///
/// Success is always answered with 200; the page's own status is in the
/// body. Failures use the classified status for both.
pub fn scrape_body(outcome: &ScrapeOutcome) -> (u16, Value) {
    match outcome {
        ScrapeOutcome::Success(page) => (200, json!(page)),
        ScrapeOutcome::Failure(failure) => (
            failure.http_status,
            json!({
                "error": failure.message,
                "status": failure.http_status,
            }),
        ),
    }
}
