//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `styling` - Style profiles, the recommendation engine and trends

pub mod foundation;
pub mod styling;
