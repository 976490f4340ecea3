//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! record code test suite.
//!
//! # Modules
//!
//! - `fixtures`: Canonical patients and randomly generated realistic ones
//! - `assertions`: Custom assertion helpers for codes and errors
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
