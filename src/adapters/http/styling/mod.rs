//! HTTP adapter for styling endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, RecommendRequest, RecommendationResponse, TrendsResponse};
pub use handlers::StylingHandlers;
pub use routes::styling_routes;
