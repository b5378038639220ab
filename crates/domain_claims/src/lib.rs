//! Claims Domain
//!
//! Claims filed against declared disasters, and the disasters themselves.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Received -> Open / In Review -> Closed
//! ```
//!
//! Only `Closed` is terminal; every other status label counts as open.

pub mod claim;
pub mod disaster;
pub mod error;

pub use claim::{Claim, ClaimStatus};
pub use disaster::Disaster;
pub use error::ClaimError;
