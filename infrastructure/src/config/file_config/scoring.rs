//! Scoring configuration from TOML (`[scoring]` section)

use quiz_domain::{ConfigIssue, ConfigIssueCode, ScoreThresholds, Severity};
use serde::{Deserialize, Serialize};

/// Raw scoring configuration from TOML
///
/// # Example
///
/// ```toml
/// [scoring]
/// passing_score = 70     # percentage counted as a pass
/// excellent_score = 80   # percentage counted as exam-ready
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScoringConfig {
    pub passing_score: u32,
    pub excellent_score: u32,
}

impl Default for FileScoringConfig {
    fn default() -> Self {
        let defaults = ScoreThresholds::default();
        Self {
            passing_score: defaults.passing,
            excellent_score: defaults.excellent,
        }
    }
}

impl FileScoringConfig {
    /// Convert to domain thresholds, clamping to `0..=100` and keeping
    /// `excellent >= passing`. Returns the issues found along the way.
    pub fn to_thresholds(&self) -> (ScoreThresholds, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let passing = self.clamp("scoring.passing_score", self.passing_score, &mut issues);
        let mut excellent =
            self.clamp("scoring.excellent_score", self.excellent_score, &mut issues);

        if excellent < passing {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ThresholdOrder { passing, excellent },
                message: format!(
                    "scoring.excellent_score ({excellent}) is below scoring.passing_score ({passing}), using {passing}"
                ),
            });
            excellent = passing;
        }

        (ScoreThresholds::new(passing, excellent), issues)
    }

    fn clamp(&self, field: &str, value: u32, issues: &mut Vec<ConfigIssue>) -> u32 {
        if value <= 100 {
            return value;
        }
        issues.push(ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::ThresholdOutOfRange {
                field: field.to_string(),
                value,
            },
            message: format!("{field}: {value} is above 100, using 100"),
        });
        100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_domain() {
        let (thresholds, issues) = FileScoringConfig::default().to_thresholds();
        assert_eq!(thresholds, ScoreThresholds::default());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let config = FileScoringConfig {
            passing_score: 150,
            excellent_score: 200,
        };
        let (thresholds, issues) = config.to_thresholds();
        assert_eq!(thresholds, ScoreThresholds::new(100, 100));
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn test_inverted_thresholds_are_fixed() {
        let config = FileScoringConfig {
            passing_score: 75,
            excellent_score: 60,
        };
        let (thresholds, issues) = config.to_thresholds();
        assert_eq!(thresholds, ScoreThresholds::new(75, 75));
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::ThresholdOrder {
                passing: 75,
                excellent: 60
            }
        ));
    }
}
