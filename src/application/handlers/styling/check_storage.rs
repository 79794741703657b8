//! CheckStorage - Query handler reporting storage connectivity.
//!
//! Used by the diagnostics endpoint. It never fails: any storage error is
//! folded into the returned status.

use std::sync::Arc;

use tracing::warn;

use crate::ports::StyleRecordStore;

/// Maximum number of collection names reported.
pub const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Maximum length of an error message carried in the status.
const MAX_ERROR_CHARS: usize = 80;

/// Query for storage status.
#[derive(Debug, Clone, Default)]
pub struct CheckStorageQuery;

/// Connectivity of the configured store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseState {
    /// No store is wired up.
    NotConfigured,
    /// The store answered a collection listing.
    Connected,
    /// The store is wired up but the probe failed.
    Error(String),
}

/// Storage status report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageStatus {
    pub database: DatabaseState,
    /// `None` when no store is configured.
    pub database_url_set: Option<bool>,
    /// `None` when no store is configured.
    pub database_name_set: Option<bool>,
    pub collections: Vec<String>,
}

impl StorageStatus {
    pub fn is_connected(&self) -> bool {
        self.database == DatabaseState::Connected
    }
}

/// Handler for storage status queries.
pub struct CheckStorageHandler {
    store: Option<Arc<dyn StyleRecordStore>>,
    database_url_set: bool,
    database_name_set: bool,
}

impl CheckStorageHandler {
    pub fn new(
        store: Option<Arc<dyn StyleRecordStore>>,
        database_url_set: bool,
        database_name_set: bool,
    ) -> Self {
        Self {
            store,
            database_url_set,
            database_name_set,
        }
    }

    pub async fn handle(&self, _query: CheckStorageQuery) -> StorageStatus {
        let Some(store) = &self.store else {
            return StorageStatus {
                database: DatabaseState::NotConfigured,
                database_url_set: None,
                database_name_set: None,
                collections: Vec::new(),
            };
        };

        let (database, collections) = match store.list_collections(MAX_REPORTED_COLLECTIONS).await
        {
            Ok(collections) => (DatabaseState::Connected, collections),
            Err(e) => {
                warn!(error = %e, "Storage probe failed");
                (DatabaseState::Error(truncate(&e.to_string())), Vec::new())
            }
        };

        StorageStatus {
            database,
            database_url_set: Some(self.database_url_set),
            database_name_set: Some(self.database_name_set),
            collections,
        }
    }
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RecordId;
    use crate::ports::StorageError;
    use async_trait::async_trait;

    struct MockStyleRecordStore {
        collections: Result<Vec<String>, StorageError>,
    }

    #[async_trait]
    impl StyleRecordStore for MockStyleRecordStore {
        async fn save(
            &self,
            _collection: &str,
            _document: serde_json::Value,
        ) -> Result<RecordId, StorageError> {
            Ok(RecordId::new())
        }

        async fn list_collections(&self, limit: usize) -> Result<Vec<String>, StorageError> {
            self.collections
                .clone()
                .map(|c| c.into_iter().take(limit).collect())
        }
    }

    #[tokio::test]
    async fn test_without_store_reports_not_configured() {
        let handler = CheckStorageHandler::new(None, false, false);
        let status = handler.handle(CheckStorageQuery).await;

        assert_eq!(status.database, DatabaseState::NotConfigured);
        assert!(status.database_url_set.is_none());
        assert!(status.collections.is_empty());
        assert!(!status.is_connected());
    }

    #[tokio::test]
    async fn test_connected_store_reports_collections() {
        let store = Arc::new(MockStyleRecordStore {
            collections: Ok(vec!["profile".to_string(), "recommendation".to_string()]),
        });
        let handler = CheckStorageHandler::new(Some(store), true, false);
        let status = handler.handle(CheckStorageQuery).await;

        assert!(status.is_connected());
        assert_eq!(status.database_url_set, Some(true));
        assert_eq!(status.database_name_set, Some(false));
        assert_eq!(status.collections, vec!["profile", "recommendation"]);
    }

    #[tokio::test]
    async fn test_failing_store_reports_truncated_error() {
        let store = Arc::new(MockStyleRecordStore {
            collections: Err(StorageError::Database("x".repeat(200))),
        });
        let handler = CheckStorageHandler::new(Some(store), true, true);
        let status = handler.handle(CheckStorageQuery).await;

        match status.database {
            DatabaseState::Error(message) => assert_eq!(message.chars().count(), 80),
            other => panic!("expected error state, got {:?}", other),
        }
        assert!(status.collections.is_empty());
    }
}
