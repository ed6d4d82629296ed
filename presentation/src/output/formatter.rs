//! Output formatter trait

use super::{console::ConsoleFormatter, json::JsonFormatter};
use quiz_domain::{OutputFormat, ScoreThresholds, Test, TestResult};
use std::sync::Arc;

/// Trait for formatting bank listings and scored attempts
pub trait OutputFormatter {
    /// Format the list of available tests
    fn test_list(&self, tests: &[Arc<Test>]) -> String;

    /// Format a scored attempt
    fn result(&self, test: &Test, result: &TestResult, thresholds: &ScoreThresholds) -> String;
}

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
