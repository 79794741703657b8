//! Styling module - profiles, the recommendation rule engine and trends.
//!
//! # Components
//!
//! - `Profile` - Optional, free-form style attributes supplied by the user
//! - `RecommendationEngine` - Deterministic rules producing a `Recommendation`
//! - `TrendsSnapshot` - Curated, static trend lists
//!
//! Everything here is pure: no I/O, no clock, no shared state. Persistence
//! lives behind the `StyleRecordStore` port.

mod attributes;
mod engine;
mod profile;
mod recommendation;
mod trends;

pub use attributes::{BodyType, Budget, SkinTone, StylePreference, Undertone};
pub use engine::RecommendationEngine;
pub use profile::Profile;
pub use recommendation::{summarize, Recommendation};
pub use trends::TrendsSnapshot;
