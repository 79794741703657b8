//! In-Memory Style Record Store Adapter
//!
//! Keeps stored documents in memory.
//! Useful for testing and for running without a database.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::RecordId;
use crate::ports::{StorageError, StoredRecord, StyleRecordStore};

/// In-memory storage for style documents
#[derive(Debug, Clone, Default)]
pub struct InMemoryStyleRecordStore {
    records: Arc<RwLock<Vec<StoredRecord>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryStyleRecordStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose every operation fails (useful for tests)
    pub fn failing() -> Self {
        let store = Self::new();
        store.set_failing(true);
        store
    }

    /// Toggle simulated unavailability
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Records stored in one collection, in insertion order
    pub async fn records_in(&self, collection: &str) -> Vec<StoredRecord> {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| r.collection == collection)
            .cloned()
            .collect()
    }

    /// Get the number of stored records
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(
                "in-memory store set to fail".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl StyleRecordStore for InMemoryStyleRecordStore {
    async fn save(
        &self,
        collection: &str,
        document: serde_json::Value,
    ) -> Result<RecordId, StorageError> {
        self.check_available()?;

        let record = StoredRecord::new(collection, document);
        let id = record.id;
        self.records.write().await.push(record);
        Ok(id)
    }

    async fn list_collections(&self, limit: usize) -> Result<Vec<String>, StorageError> {
        self.check_available()?;

        let records = self.records.read().await;
        let names: BTreeSet<&str> = records.iter().map(|r| r.collection.as_str()).collect();
        Ok(names.into_iter().take(limit).map(str::to_string).collect())
    }
}
