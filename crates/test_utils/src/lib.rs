//! Test Utilities Crate
//!
//! Shared test infrastructure for the disaster analytics test suite.
//!
//! # Modules
//!
//! - `fixtures`: A small hand-checked dataset with known query answers
//! - `builders`: Builder patterns for individual records
//! - `assertions`: Assertion helpers for money and density values
//! - `generators`: Property-based generators for valid datasets

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
