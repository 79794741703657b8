//! PostgreSQL implementation of StyleRecordStore.
//!
//! Documents are kept as JSONB rows in `style_documents`, keyed by UUID and
//! tagged with their collection name.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::config::DatabaseConfig;
use crate::domain::foundation::RecordId;
use crate::ports::{StorageError, StoredRecord, StyleRecordStore};

/// PostgreSQL implementation of StyleRecordStore.
#[derive(Clone)]
pub struct PgStyleRecordStore {
    pool: PgPool,
}

impl PgStyleRecordStore {
    /// Creates a new PgStyleRecordStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a lazily-connected pool from configuration.
    ///
    /// No connection is attempted until the first query, so an unreachable
    /// database does not prevent startup.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_lazy(&config.url)
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        Ok(Self::new(pool))
    }

    /// Applies the bundled schema migrations.
    pub async fn run_migrations(&self) -> Result<(), StorageError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StorageError::Database(format!("Failed to run migrations: {}", e)))
    }
}

#[async_trait]
impl StyleRecordStore for PgStyleRecordStore {
    async fn save(
        &self,
        collection: &str,
        document: serde_json::Value,
    ) -> Result<RecordId, StorageError> {
        let record = StoredRecord::new(collection, document);

        sqlx::query(
            r#"
            INSERT INTO style_documents (
                id, collection, document, stored_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(&record.collection)
        .bind(&record.document)
        .bind(record.stored_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Database(format!("Failed to insert {}: {}", collection, e)))?;

        Ok(record.id)
    }

    async fn list_collections(&self, limit: usize) -> Result<Vec<String>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT DISTINCT collection
            FROM style_documents
            ORDER BY collection
            LIMIT $1
            "#,
        )
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Database(format!("Failed to list collections: {}", e)))?;

        Ok(rows.iter().map(|row| row.get("collection")).collect())
    }
}
