//! Party validation rules
//!
//! # Validation Rules
//!
//! ## Agents
//! - Must have first name and last name
//! - State must be one of the 50 states or the District of Columbia
//! - A recorded region should agree with the region derived from the state
//! - Must have a primary language
//!
//! ## Claim Handlers
//! - Must have first name and last name

use crate::agent::Agent;
use crate::claim_handler::ClaimHandler;
use crate::error::PartyError;

/// Result of party validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the record is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    fn joined_errors(&self) -> String {
        self.errors.join("; ")
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for party records loaded from the dataset
pub struct PartyValidator;

impl PartyValidator {
    /// Checks an agent record
    pub fn validate_agent(agent: &Agent) -> ValidationResult {
        let mut result = ValidationResult::ok();

        Self::validate_names(&agent.first_name, &agent.last_name, &mut result);

        match agent.derived_region() {
            Some(region) => {
                if !agent.region.is_empty() && !agent.region.eq_ignore_ascii_case(region.name()) {
                    result.add_warning(format!(
                        "Recorded region {} does not match {} derived from {}",
                        agent.region, region, agent.state
                    ));
                }
            }
            None => result.add_error(format!("Unknown state: {}", agent.state)),
        }

        if agent.primary_language.trim().is_empty() {
            result.add_error("Primary language is required");
        }

        result
    }

    /// Checks a claim handler record
    pub fn validate_claim_handler(handler: &ClaimHandler) -> ValidationResult {
        let mut result = ValidationResult::ok();
        Self::validate_names(&handler.first_name, &handler.last_name, &mut result);
        result
    }

    /// Like [`validate_agent`](Self::validate_agent) but fails on the first invalid record
    pub fn ensure_agent(agent: &Agent) -> Result<ValidationResult, PartyError> {
        let result = Self::validate_agent(agent);
        if result.is_valid {
            Ok(result)
        } else {
            Err(PartyError::InvalidAgent {
                id: agent.id.get(),
                reasons: result.joined_errors(),
            })
        }
    }

    pub fn ensure_claim_handler(handler: &ClaimHandler) -> Result<ValidationResult, PartyError> {
        let result = Self::validate_claim_handler(handler);
        if result.is_valid {
            Ok(result)
        } else {
            Err(PartyError::InvalidClaimHandler {
                id: handler.id.get(),
                reasons: result.joined_errors(),
            })
        }
    }

    fn validate_names(first_name: &str, last_name: &str, result: &mut ValidationResult) {
        if first_name.trim().is_empty() {
            result.add_error("First name is required");
        }
        if last_name.trim().is_empty() {
            result.add_error("Last name is required");
        }
    }
}
