//! Error types for the microscout-core crate.
//!
//! Only exceptional conditions surface here. "No matches" and "upstream
//! failed" are ordinary return values of the engines, not errors.

/// Errors raised by the core crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// FAQ data did not have the `{id, title, body}` shape.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// Invalid scrape configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP error: {0}")]
    Http(String),
}

/// Convenience type alias for microscout-core results.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_malformed_record() {
        let err = CoreError::MalformedRecord("record 2: missing field `body`".into());
        assert_eq!(
            err.to_string(),
            "malformed record: record 2: missing field `body`"
        );
    }

    #[test]
    fn display_config() {
        let err = CoreError::Config("timeout_seconds must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "config error: timeout_seconds must be greater than 0"
        );
    }

    #[test]
    fn display_http() {
        let err = CoreError::Http("failed to build HTTP client".into());
        assert_eq!(err.to_string(), "HTTP error: failed to build HTTP client");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoreError>();
    }
}
