//! Question bank port
//!
//! Defines the interface through which the application obtains the list of
//! practice tests. Adapters live in the infrastructure layer (bundled dataset,
//! JSON/TOML files).

use quiz_domain::Test;
use thiserror::Error;

/// Errors raised while reading or decoding a question bank
#[derive(Error, Debug)]
pub enum QuestionBankError {
    #[error("Failed to read question bank {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse question bank {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("Unsupported question bank format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),
}

/// Supplies the ordered, immutable list of tests
pub trait QuestionBankPort: Send + Sync {
    /// Load every test of the bank, in display order
    fn load_tests(&self) -> Result<Vec<Test>, QuestionBankError>;

    /// Human-readable description of where the tests come from
    fn source_name(&self) -> String;
}
