//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Severity rating {0} is outside the range 1 to 10")]
    SeverityOutOfRange(i64),
}
