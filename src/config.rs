//! Service configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) yields a working
//! local setup: listen on `127.0.0.1:3000`, read `data/faqs.json`.

use crate::error::{AppError, Result};
use microscout_core::ScrapeConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for the microscout service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind. `0` picks a free port.
    pub port: u16,
    /// FAQ data file, re-read on every search request.
    pub data_path: PathBuf,
    /// Scrape engine settings.
    pub scrape: ScrapeConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3000,
            data_path: PathBuf::from("data/faqs.json"),
            scrape: ScrapeConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Validates this configuration.
    ///
    /// Checks:
    /// - `host` must not be blank
    /// - `data_path` must not be empty
    /// - the nested scrape settings must be valid
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(AppError::Config("host must not be empty".into()));
        }
        if self.data_path.as_os_str().is_empty() {
            return Err(AppError::Config("data_path must not be empty".into()));
        }
        self.scrape.validate()?;
        Ok(())
    }

    /// `host:port` string suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
