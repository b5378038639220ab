//! Party Domain
//!
//! The people claims are assigned to: field agents, who sell and service
//! policies in a single state, and claim handlers, who process claims.
//!
//! Agents are grouped into four US regions derived from their state.
//!
//! # Examples
//!
//! ```rust
//! use domain_party::Region;
//!
//! assert_eq!(Region::for_state("Texas"), Some(Region::South));
//! assert_eq!(Region::for_state("District of Columbia"), Some(Region::Northeast));
//! assert_eq!(Region::for_state("Ontario"), None);
//! ```

pub mod agent;
pub mod claim_handler;
pub mod region;
pub mod validation;
pub mod error;

pub use agent::Agent;
pub use claim_handler::ClaimHandler;
pub use region::Region;
pub use validation::{PartyValidator, ValidationResult};
pub use error::PartyError;
