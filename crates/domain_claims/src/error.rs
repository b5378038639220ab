//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Invalid claim {id}: {reason}")]
    InvalidClaim { id: i64, reason: String },

    #[error("Invalid disaster {id}: {reason}")]
    InvalidDisaster { id: i64, reason: String },
}
