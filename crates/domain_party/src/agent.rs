//! Insurance field agents

use serde::{Deserialize, Serialize};

use core_kernel::AgentId;
use crate::region::Region;

/// An insurance agent working in a single state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub first_name: String,
    pub last_name: String,
    /// Full state name, e.g. "New Hampshire"
    pub state: String,
    /// Region label as recorded in the source data
    #[serde(default)]
    pub region: String,
    pub primary_language: String,
    #[serde(default)]
    pub secondary_language: Option<String>,
    pub years_active: u32,
}

impl Agent {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Region derived from the agent's state
    pub fn derived_region(&self) -> Option<Region> {
        Region::for_state(&self.state)
    }

    /// Primary language followed by the secondary one, when recorded
    ///
    /// A blank secondary language counts as absent.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_language.as_str()).chain(
            self.secondary_language
                .as_deref()
                .filter(|language| !language.trim().is_empty()),
        )
    }

    pub fn speaks(&self, language: &str) -> bool {
        self.languages().any(|spoken| spoken == language)
    }
}
