//! Party domain errors

use thiserror::Error;

/// Errors that can occur in the party domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartyError {
    /// Region name did not match any known region
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    /// Agent record failed validation
    #[error("Invalid agent {id}: {reasons}")]
    InvalidAgent { id: i64, reasons: String },

    /// Claim handler record failed validation
    #[error("Invalid claim handler {id}: {reasons}")]
    InvalidClaimHandler { id: i64, reasons: String },
}
