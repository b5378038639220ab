//! Infrastructure Storage Layer
//!
//! Reads the four static JSON files (arrays of flat records) that back the
//! analytics engine and assembles them into a validated
//! [`Dataset`](domain_analytics::Dataset).
//!
//! Loading happens once at startup. Any failure here is fatal for the
//! process: a missing file, malformed JSON, or records that break the
//! dataset invariants.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::JsonStore;
//!
//! let dataset = JsonStore::open("data")?.load()?;
//! ```

pub mod store;
pub mod error;

pub use store::{JsonStore, StoreConfig, AGENTS_FILE, CLAIM_HANDLERS_FILE, CLAIMS_FILE, DISASTERS_FILE};
pub use error::StoreError;
