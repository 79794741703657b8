//! GetTrends - Query handler for the curated trend snapshot.

use crate::domain::styling::TrendsSnapshot;

/// Query for current trends.
#[derive(Debug, Clone, Default)]
pub struct GetTrendsQuery;

/// Handler for trend queries.
#[derive(Debug, Clone, Default)]
pub struct GetTrendsHandler;

impl GetTrendsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, _query: GetTrendsQuery) -> TrendsSnapshot {
        TrendsSnapshot::current()
    }
}
