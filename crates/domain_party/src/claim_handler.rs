//! Claim handlers

use serde::{Deserialize, Serialize};

use core_kernel::ClaimHandlerId;

/// Staff member who processes claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimHandler {
    pub id: ClaimHandlerId,
    pub first_name: String,
    pub last_name: String,
}

impl ClaimHandler {
    pub fn new(id: ClaimHandlerId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
