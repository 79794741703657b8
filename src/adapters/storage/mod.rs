//! Storage Adapters
//!
//! Implementations of the StyleRecordStore port.
//!
//! ## Available Adapters
//!
//! - **PgStyleRecordStore** - Stores documents as JSONB rows in PostgreSQL
//! - **InMemoryStyleRecordStore** - Stores documents in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryStyleRecordStore, PgStyleRecordStore};
//!
//! // Production: PostgreSQL
//! let store = PgStyleRecordStore::connect_lazy(&config.database)?;
//!
//! // Testing: in-memory storage
//! let store = InMemoryStyleRecordStore::new();
//! ```

mod in_memory_style_store;
mod postgres_style_store;

pub use in_memory_style_store::InMemoryStyleRecordStore;
pub use postgres_style_store::PgStyleRecordStore;
