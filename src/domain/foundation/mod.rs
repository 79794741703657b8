//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the StyleSense domain.

mod errors;
mod ids;

pub use errors::{DomainError, ErrorCode};
pub use ids::RecordId;
