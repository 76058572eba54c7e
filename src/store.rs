//! Read-only FAQ data store.
//!
//! The service re-reads its records on every search request; nothing is
//! cached between calls. [`FaqStore`] is the seam, [`JsonFileStore`] the
//! production provider.

use async_trait::async_trait;
use microscout_core::{parse_records, CoreError, FaqRecord};
use std::path::PathBuf;

/// Why records could not be provided.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing data could not be read at all.
    #[error("data unavailable: {0}")]
    Unavailable(String),

    /// The data was read but is not a valid record set.
    #[error(transparent)]
    Malformed(#[from] CoreError),
}

/// A read-only provider of FAQ records.
#[async_trait]
pub trait FaqStore: Send + Sync {
    /// Load the full record set.
    async fn load(&self) -> Result<Vec<FaqRecord>, StoreError>;
}

/// Records stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FaqStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<FaqRecord>, StoreError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::Unavailable(format!("{}: {e}", self.path.display())))?;
        let records = parse_records(&content)?;
        tracing::trace!(count = records.len(), path = %self.path.display(), "faq records loaded");
        Ok(records)
    }
}

/// A fixed in-memory record set.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<FaqRecord>,
}

impl MemoryStore {
    pub fn new(records: Vec<FaqRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl FaqStore for MemoryStore {
    async fn load(&self) -> Result<Vec<FaqRecord>, StoreError> {
        Ok(self.records.clone())
    }
}
