//! Score bands for result presentation

use serde::{Deserialize, Serialize};

/// Percentage thresholds used to classify a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreThresholds {
    /// Minimum percentage counted as a pass
    pub passing: u32,
    /// Minimum percentage counted as exam-ready
    pub excellent: u32,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            passing: 70,
            excellent: 80,
        }
    }
}

impl ScoreThresholds {
    pub fn new(passing: u32, excellent: u32) -> Self {
        Self { passing, excellent }
    }

    pub fn is_passing(&self, percentage: u32) -> bool {
        percentage >= self.passing
    }

    pub fn band(&self, percentage: u32) -> ScoreBand {
        if percentage >= self.excellent {
            ScoreBand::Excellent
        } else if percentage >= self.passing {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsStudy
        }
    }
}

/// Classification of a percentage score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsStudy,
}

impl ScoreBand {
    /// Advice shown under the overall score
    pub fn message(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent! You are well-prepared for the exam.",
            ScoreBand::Good => "Good job! With a bit more study, you will be ready.",
            ScoreBand::NeedsStudy => "More study needed. Focus on the domains with lower scores.",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBand::Excellent => write!(f, "Excellent"),
            ScoreBand::Good => write!(f, "Good"),
            ScoreBand::NeedsStudy => write!(f, "Needs study"),
        }
    }
}
