//! Styling application handlers.
//!
//! Command and query handlers for recommendations, trends and storage status.

mod check_storage;
mod generate_recommendation;
mod get_trends;

pub use check_storage::{
    CheckStorageHandler, CheckStorageQuery, DatabaseState, StorageStatus,
    MAX_REPORTED_COLLECTIONS,
};
pub use generate_recommendation::{
    GenerateRecommendationCommand, GenerateRecommendationHandler, GenerateRecommendationResult,
    PendingPersistence, PersistenceOutcome, DEFAULT_PERSIST_TIMEOUT,
};
pub use get_trends::{GetTrendsHandler, GetTrendsQuery};
