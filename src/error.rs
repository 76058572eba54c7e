//! Error types for the microscout service.
//!
//! [`AppError`] covers startup and CLI failures. [`ApiError`] is what HTTP
//! handlers return; it renders as `{"error": "..."}` with a matching status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Top-level error type for the service and CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Error from the core engines.
    #[error(transparent)]
    Core(#[from] microscout_core::CoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Handler-level error mapped to an HTTP status.
///
/// - `BadRequest` → 400
/// - `Internal` → 500, with the detail logged and a generic message returned
#[derive(Debug)]
pub enum ApiError {
    /// Caller input failed validation (400).
    BadRequest(String),
    /// Unexpected failure in the service itself (500).
    Internal {
        /// Text shown to the caller.
        public: String,
        /// Detail for the log only.
        detail: String,
    },
}

impl ApiError {
    /// A 500 with the generic public message.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            public: "Internal Server Error".to_owned(),
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Internal { public, detail } => {
                tracing::error!(error = %detail, "internal error");
                public
            }
        };
        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config() {
        let err = AppError::Config("port out of range".into());
        assert_eq!(err.to_string(), "config error: port out of range");
    }

    #[test]
    fn core_errors_are_transparent() {
        let err = AppError::from(microscout_core::CoreError::MalformedRecord(
            "record 0: expected an object".into(),
        ));
        assert_eq!(err.to_string(), "malformed record: record 0: expected an object");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppError>();
    }

    #[test]
    fn bad_request_is_400() {
        let resp = ApiError::BadRequest("Invalid URL".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_is_500_with_generic_message() {
        let err = ApiError::internal("disk on fire");
        match &err {
            ApiError::Internal { public, .. } => assert_eq!(public, "Internal Server Error"),
            ApiError::BadRequest(_) => panic!("expected internal"),
        }
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
