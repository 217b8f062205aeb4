//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Loan not found
    NotFound,
    /// Validation error with message
    Validation(String),
    /// Renewal payment negative or above the total owed
    InvalidPayment(String),
    /// Renewal due date did not parse as a calendar date
    InvalidDate(String),
    /// Persisted snapshot data could not be decoded
    CorruptState(String),
    /// Snapshot storage error
    Storage(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Loan not found"),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::InvalidPayment(msg) => write!(f, "Invalid payment: {}", msg),
            DomainError::InvalidDate(msg) => write!(f, "Invalid date: {}", msg),
            DomainError::CorruptState(msg) => write!(f, "Corrupt snapshot: {}", msg),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversions from storage-layer errors (used in the infrastructure layer)
impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}
