//! HTTP handlers for system endpoints.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::application::handlers::styling::{CheckStorageHandler, CheckStorageQuery};

use super::dto::{RootResponse, StorageStatusResponse};

#[derive(Clone)]
pub struct SystemHandlers {
    check_storage_handler: Arc<CheckStorageHandler>,
}

impl SystemHandlers {
    pub fn new(check_storage_handler: Arc<CheckStorageHandler>) -> Self {
        Self {
            check_storage_handler,
        }
    }
}

/// GET / - Liveness message
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, Json(RootResponse::running()))
}

/// GET /test - Storage diagnostics
pub async fn storage_status(State(handlers): State<SystemHandlers>) -> impl IntoResponse {
    let status = handlers
        .check_storage_handler
        .handle(CheckStorageQuery)
        .await;
    let response: StorageStatusResponse = status.into();
    (StatusCode::OK, Json(response))
}
