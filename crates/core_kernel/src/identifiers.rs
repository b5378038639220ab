//! Strongly-typed identifiers for dataset records
//!
//! Every collection numbers its records densely from 1. Newtype wrappers
//! around the raw integer keep an agent id from being passed where a
//! disaster id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw record number
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw record number
            pub const fn get(&self) -> i64 {
                self.0
            }

            /// Zero-based position of this id in a densely numbered collection
            ///
            /// Returns `None` for ids below 1.
            pub fn position(&self) -> Option<usize> {
                usize::try_from(self.0).ok()?.checked_sub(1)
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let digits = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(digits.parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(AgentId, "AGT");
define_id!(ClaimHandlerId, "CHD");
define_id!(ClaimId, "CLM");
define_id!(DisasterId, "DIS");
