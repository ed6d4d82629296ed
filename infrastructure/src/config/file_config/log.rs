//! Logging configuration from TOML (`[log]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
///
/// The terminal UI owns the screen, so logs go to a file. When `directory`
/// is unset, the platform data directory is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Directory for the log file
    pub directory: Option<String>,
    /// Default filter directive when `-v` is not given (e.g. "info")
    pub level: Option<String>,
}
