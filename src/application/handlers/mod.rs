//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod styling;

pub use styling::{
    CheckStorageHandler, CheckStorageQuery, DatabaseState, GenerateRecommendationCommand,
    GenerateRecommendationHandler, GenerateRecommendationResult, GetTrendsHandler,
    GetTrendsQuery, PendingPersistence, PersistenceOutcome, StorageStatus,
};
