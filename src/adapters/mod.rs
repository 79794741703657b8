//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API (axum)
//! - `storage` - StyleRecordStore implementations (PostgreSQL, in-memory)

pub mod http;
pub mod storage;

pub use http::build_router;
pub use storage::{InMemoryStyleRecordStore, PgStyleRecordStore};
