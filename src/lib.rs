//! StyleSense - Personal style recommendations
//!
//! This crate maps a personal style profile (skin tone, undertone, body
//! type, style preferences, budget) to makeup, skincare, clothing and
//! accessory advice through a deterministic rule engine, and serves it over
//! HTTP with best-effort persistence.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
