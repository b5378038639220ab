//! Claim severity ratings

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// A claim severity on the 1 to 10 scale, inclusive
///
/// Construction is the only place the bounds are checked, so any
/// `SeverityRating` in hand is known to be in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SeverityRating(u8);

impl SeverityRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Validates a raw rating
    pub fn new(value: i64) -> Result<Self, CoreError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CoreError::SeverityOutOfRange(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for SeverityRating {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SeverityRating> for i64 {
    fn from(rating: SeverityRating) -> i64 {
        i64::from(rating.0)
    }
}

impl fmt::Display for SeverityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
