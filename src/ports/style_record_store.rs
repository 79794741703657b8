//! StyleRecordStore port - best-effort persistence of style documents.
//!
//! Profiles and recommendations are stored as opaque JSON documents grouped
//! by collection name. Callers treat every failure here as non-fatal.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::RecordId;

/// Collection holding submitted profiles.
pub const PROFILE_COLLECTION: &str = "profile";

/// Collection holding generated recommendations.
pub const RECOMMENDATION_COLLECTION: &str = "recommendation";

/// Errors that can occur during store operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize document: {0}")]
    Serialization(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A persisted document with its bookkeeping fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: RecordId,
    pub collection: String,
    pub document: serde_json::Value,
    pub stored_at: DateTime<Utc>,
}

impl StoredRecord {
    /// Stamps a fresh document with a new ID and the current time.
    pub fn new(collection: impl Into<String>, document: serde_json::Value) -> Self {
        Self {
            id: RecordId::new(),
            collection: collection.into(),
            document,
            stored_at: Utc::now(),
        }
    }
}

/// Port for persisting style documents
#[async_trait]
pub trait StyleRecordStore: Send + Sync {
    /// Save a document into a collection
    ///
    /// # Returns
    /// The ID assigned to the stored record
    ///
    /// # Errors
    /// Returns `StorageError` if the write fails
    async fn save(
        &self,
        collection: &str,
        document: serde_json::Value,
    ) -> Result<RecordId, StorageError>;

    /// List distinct collection names currently holding documents
    ///
    /// At most `limit` names are returned, sorted alphabetically.
    async fn list_collections(&self, limit: usize) -> Result<Vec<String>, StorageError>;
}

/// Serializes a value into a document for `StyleRecordStore::save`.
pub fn to_document<T: Serialize>(value: &T) -> Result<serde_json::Value, StorageError> {
    serde_json::to_value(value).map_err(|e| StorageError::Serialization(e.to_string()))
}
