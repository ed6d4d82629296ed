//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod bank;
mod log;
mod output;
mod scoring;

pub use bank::FileBankConfig;
pub use log::FileLogConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use scoring::FileScoringConfig;

use quiz_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Question bank source
    pub bank: FileBankConfig,
    /// Score thresholds
    pub scoring: FileScoringConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Empty bank path
    /// 2. Score thresholds out of range or out of order
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.bank.validate());
        issues.extend(self.scoring.to_thresholds().1);
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[bank]
path = "banks/snowflake.json"

[scoring]
passing_score = 65
excellent_score = 85

[output]
format = "json"
color = false

[log]
directory = "/tmp/cert-quiz"
level = "debug"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.bank.path.as_deref(), Some("banks/snowflake.json"));
        assert_eq!(config.scoring.passing_score, 65);
        assert_eq!(config.scoring.excellent_score, 85);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.log.level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[scoring]
passing_score = 60
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.scoring.passing_score, 60);
        // Defaults should apply
        assert_eq!(config.scoring.excellent_score, 80);
        assert!(config.bank.path.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.bank.path.is_none());
        assert!(config.output.format.is_none());
        assert!(config.output.color);
        assert!(config.log.directory.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_sections() {
        let toml_str = r#"
[bank]
path = ""

[scoring]
passing_score = 90
excellent_score = 80
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate().len(), 2);
    }
}
