//! Question bank configuration from TOML (`[bank]` section)

use quiz_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Raw question bank configuration from TOML
///
/// # Example
///
/// ```toml
/// [bank]
/// path = "~/certs/advanced-data-engineer.json"   # omit to use the bundled tests
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBankConfig {
    /// Path to a `.json` or `.toml` bank file
    pub path: Option<String>,
}

impl FileBankConfig {
    /// Resolved bank path, expanding a leading `~/`
    pub fn resolved_path(&self) -> Option<std::path::PathBuf> {
        let path = self.path.as_deref()?.trim();
        if path.is_empty() {
            return None;
        }
        match path.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(std::path::PathBuf::from(path)),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        match self.path.as_deref() {
            Some(path) if path.trim().is_empty() => vec![ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::EmptyPath {
                    field: "bank.path".to_string(),
                },
                message: "bank.path is empty, falling back to the bundled tests".to_string(),
            }],
            _ => vec![],
        }
    }
}
