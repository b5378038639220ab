//! Claims Analytics Domain
//!
//! Answers a fixed catalogue of aggregate questions over four record
//! collections: agents, claim handlers, claims and disasters.
//!
//! # Architecture
//!
//! - **Dataset**: the four collections, validated once and immutable afterwards
//! - **QueryEngine**: pure read-only queries borrowing a `Dataset`
//! - **Filters**: field-by-field record matching for listing endpoints
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_analytics::{Dataset, QueryEngine};
//!
//! let dataset = Dataset::new(agents, claim_handlers, claims, disasters)?;
//! let engine = QueryEngine::new(&dataset);
//! let closed = engine.count_closed_claims();
//! ```

pub mod dataset;
pub mod engine;
pub mod filters;
pub mod error;

pub use dataset::{Dataset, DatasetSummary};
pub use engine::{OpenClaims, QueryEngine, MonthlyVolume};
pub use filters::{AgentFilter, ClaimFilter, ClaimHandlerFilter, DisasterFilter};
pub use error::AnalyticsError;
