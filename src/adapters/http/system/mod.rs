//! HTTP adapter for system endpoints (liveness and storage diagnostics).

mod dto;
mod handlers;
mod routes;

pub use dto::{RootResponse, StorageStatusResponse};
pub use handlers::SystemHandlers;
pub use routes::system_routes;
