//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for non-interactive results
///
/// This is a domain concept representing how a finished attempt or the test
/// list is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored text (default)
    #[default]
    Text,
    /// JSON output
    Json,
}
