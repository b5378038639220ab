//! Analytics domain errors

use thiserror::Error;

use domain_claims::ClaimError;
use domain_party::PartyError;

/// Errors raised while assembling a dataset
///
/// Queries themselves never fail; absence is reported through `Option`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("{collection} ids must run densely from 1: expected {expected}, found {found}")]
    NonDenseIds {
        collection: &'static str,
        expected: i64,
        found: i64,
    },

    #[error("Claim {claim_id} references missing {target} {target_id}")]
    DanglingReference {
        claim_id: i64,
        target: &'static str,
        target_id: i64,
    },

    #[error(transparent)]
    Party(#[from] PartyError),

    #[error(transparent)]
    Claim(#[from] ClaimError),
}
