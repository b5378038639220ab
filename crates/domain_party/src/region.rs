//! US regions
//!
//! Every state (plus the District of Columbia) belongs to exactly one of four
//! regions. The table below is the single source for that assignment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PartyError;

/// Geographic region an agent's state belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Region {
    West,
    Midwest,
    South,
    Northeast,
}

const WEST: &[&str] = &[
    "Alaska", "Hawaii", "Washington", "Oregon", "California", "Montana", "Idaho",
    "Wyoming", "Nevada", "Utah", "Colorado", "Arizona", "New Mexico",
];

const MIDWEST: &[&str] = &[
    "North Dakota", "South Dakota", "Minnesota", "Wisconsin", "Michigan", "Nebraska",
    "Iowa", "Illinois", "Indiana", "Ohio", "Missouri", "Kansas",
];

const SOUTH: &[&str] = &[
    "Oklahoma", "Texas", "Arkansas", "Louisiana", "Kentucky", "Tennessee", "Mississippi",
    "Alabama", "West Virginia", "Virginia", "North Carolina", "South Carolina",
    "Georgia", "Florida",
];

const NORTHEAST: &[&str] = &[
    "Maryland", "Delaware", "District of Columbia", "Pennsylvania", "New York",
    "New Jersey", "Connecticut", "Massachusetts", "Vermont", "New Hampshire",
    "Rhode Island", "Maine",
];

impl Region {
    pub const ALL: [Region; 4] = [Region::West, Region::Midwest, Region::South, Region::Northeast];

    /// Region containing the named state, matched exactly
    pub fn for_state(state: &str) -> Option<Region> {
        Self::ALL
            .into_iter()
            .find(|region| region.states().iter().any(|name| *name == state))
    }

    /// Whether a name is one of the 50 states or the District of Columbia
    pub fn is_known_state(state: &str) -> bool {
        Self::for_state(state).is_some()
    }

    /// States in this region
    pub fn states(&self) -> &'static [&'static str] {
        match self {
            Region::West => WEST,
            Region::Midwest => MIDWEST,
            Region::South => SOUTH,
            Region::Northeast => NORTHEAST,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::West => "West",
            Region::Midwest => "Midwest",
            Region::South => "South",
            Region::Northeast => "Northeast",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = PartyError;

    /// Case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PartyError::UnknownRegion(s.to_string()))
    }
}

impl TryFrom<String> for Region {
    type Error = PartyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
