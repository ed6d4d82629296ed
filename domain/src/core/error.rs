//! Domain error types

use crate::bank::entities::TestId;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown test: {0}")]
    UnknownTest(TestId),

    #[error("Test {0} has no questions")]
    EmptyTest(TestId),

    #[error("Invalid question bank: {0}")]
    InvalidBank(String),
}

impl DomainError {
    /// Check if this error is caused by the bank data itself
    pub fn is_bank_error(&self) -> bool {
        matches!(self, DomainError::InvalidBank(_) | DomainError::EmptyTest(_))
    }
}
