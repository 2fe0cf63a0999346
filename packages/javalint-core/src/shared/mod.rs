//! Shared module - Common types and utilities
//!
//! This module contains types that are shared across all features.
//! It has ZERO external dependencies beyond serde.

pub mod models;

pub use models::Span;
