//! Claim records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{AgentId, ClaimHandlerId, ClaimId, DisasterId, SeverityRating};
use crate::error::ClaimError;

const CLOSED: &str = "Closed";

/// Claim status
///
/// Status labels are compared exactly: only `"Closed"` closes a claim.
/// Any other label, including `"closed"`, is an open state and keeps its
/// original spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClaimStatus {
    Closed,
    Open(String),
}

impl ClaimStatus {
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        if label == CLOSED {
            ClaimStatus::Closed
        } else {
            ClaimStatus::Open(label)
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, ClaimStatus::Closed)
    }

    pub fn label(&self) -> &str {
        match self {
            ClaimStatus::Closed => CLOSED,
            ClaimStatus::Open(label) => label.as_str(),
        }
    }
}

impl From<String> for ClaimStatus {
    fn from(label: String) -> Self {
        ClaimStatus::from_label(label)
    }
}

impl From<ClaimStatus> for String {
    fn from(status: ClaimStatus) -> String {
        match status {
            ClaimStatus::Closed => CLOSED.to_string(),
            ClaimStatus::Open(label) => label,
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A claim filed against a disaster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: ClaimId,
    pub disaster_id: DisasterId,
    pub status: ClaimStatus,
    pub total_loss: bool,
    pub loss_of_life: bool,
    #[serde(rename = "type")]
    pub claim_type: String,
    pub severity_rating: SeverityRating,
    /// Estimated cost in US dollars
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub estimate_cost: Decimal,
    pub agent_assigned_id: AgentId,
    pub claim_handler_assigned_id: ClaimHandlerId,
}

impl Claim {
    pub fn is_closed(&self) -> bool {
        self.status.is_closed()
    }

    pub fn is_open(&self) -> bool {
        !self.status.is_closed()
    }

    /// Whether the claim's severity is at or above the given floor
    pub fn is_at_least(&self, severity: SeverityRating) -> bool {
        self.severity_rating >= severity
    }

    /// Checks field-level invariants that serde cannot express
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.estimate_cost.is_sign_negative() && !self.estimate_cost.is_zero() {
            return Err(ClaimError::InvalidClaim {
                id: self.id.get(),
                reason: format!("negative estimate cost {}", self.estimate_cost),
            });
        }
        Ok(())
    }
}
