//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter for endpoint exposure; `app` composes
//! them with CORS, timeout and tracing layers.

pub mod app;
pub mod styling;
pub mod system;

// Re-export key types for convenience
pub use app::build_router;
pub use styling::{styling_routes, StylingHandlers};
pub use system::{system_routes, SystemHandlers};
