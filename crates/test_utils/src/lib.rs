//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! motor tariff test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built products and requests
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
