//! HTTP routes for system endpoints.

use axum::{routing::get, Router};

use super::handlers::{root, storage_status, SystemHandlers};

/// Creates the system router.
///
/// Routes:
/// - `GET /` - Liveness message
/// - `GET /test` - Storage diagnostics
pub fn system_routes(handlers: SystemHandlers) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/test", get(storage_status))
        .with_state(handlers)
}
