//! Presentation-level configuration
//!
//! Settings resolved from the config file and CLI flags, in the shape the
//! output formatter and line mode consume.

use quiz_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Layer CLI overrides on top of file settings
    pub fn resolve(
        file_format: Option<OutputFormat>,
        file_color: bool,
        cli_format: Option<OutputFormat>,
        no_color: bool,
    ) -> Self {
        Self {
            format: cli_format.or(file_format).unwrap_or_default(),
            color: file_color && !no_color,
        }
    }

    /// Apply the color setting to all console output
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

/// Line-mode configuration for the presentation layer
#[derive(Debug, Clone, Default)]
pub struct ReplConfig {
    /// Path to history file
    pub history_file: Option<PathBuf>,
}
