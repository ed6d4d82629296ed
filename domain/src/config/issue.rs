//! Configuration issues detected while validating settings

use crate::bank::validation::Severity;

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A percentage threshold is above 100.
    ThresholdOutOfRange { field: String, value: u32 },
    /// The excellent threshold is below the passing threshold.
    ThresholdOrder { passing: u32, excellent: u32 },
    /// A configured path is empty.
    EmptyPath { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}
