//! # microscout
//!
//! A small HTTP service in front of [`microscout_core`]: FAQ keyword search
//! with an extractive summary, and single-page metadata scraping.
//!
//! This crate owns only the boundary. It validates request shape, loads the
//! FAQ store fresh for every search, calls the core, and shapes JSON
//! responses. Ranking and extraction live in the core crate.

pub mod api;
pub mod config;
pub mod error;
pub mod store;

pub use api::{router, run_server, AppState};
pub use config::ServiceConfig;
pub use error::{ApiError, AppError, Result};
pub use store::{FaqStore, JsonFileStore, MemoryStore, StoreError};
