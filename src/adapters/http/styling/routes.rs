//! HTTP routes for styling endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_trends, recommend, StylingHandlers};

/// Creates the styling router with all endpoints.
///
/// Routes (mounted under `/api`):
/// - `POST /recommend` - Generate recommendations for a profile
/// - `GET /trends` - Current curated trends
pub fn styling_routes(handlers: StylingHandlers) -> Router {
    Router::new()
        .route("/recommend", post(recommend))
        .route("/trends", get(get_trends))
        .with_state(handlers)
}
