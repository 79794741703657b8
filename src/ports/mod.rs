//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `StyleRecordStore` - Best-effort persistence of profiles and recommendations

mod style_record_store;

pub use style_record_store::{
    to_document, StorageError, StoredRecord, StyleRecordStore, PROFILE_COLLECTION,
    RECOMMENDATION_COLLECTION,
};
