//! Core Kernel - Foundational types shared by every claims analytics crate
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Integer identifiers for agents, claim handlers, claims and disasters
//! - Bounded severity ratings
//! - Currency rounding with precise decimal arithmetic
//! - Calendar month labels for date-based grouping

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod severity;
pub mod error;

pub use money::{round_currency, average_amount, round_to_places, CURRENCY_DECIMAL_PLACES};
pub use temporal::MonthOfYear;
pub use identifiers::{AgentId, ClaimHandlerId, ClaimId, DisasterId};
pub use severity::SeverityRating;
pub use error::CoreError;
