//! Test result value objects

use super::band::{ScoreBand, ScoreThresholds};
use crate::attempt::answer::UserAnswer;
use crate::bank::entities::TestId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Correct/total tally for one domain name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainScore {
    /// The question domain string this bucket aggregates
    pub domain: String,
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
}

impl DomainScore {
    pub fn band(&self, thresholds: &ScoreThresholds) -> ScoreBand {
        thresholds.band(self.percentage)
    }
}

/// Aggregated outcome of an attempt.
///
/// Produced by [`score`](super::score) without timing information; the caller
/// that owns the attempt lifecycle stamps completion through
/// [`TestResult::finished`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub test_id: TestId,
    /// The answer set as handed to scoring
    pub answers: Vec<UserAnswer>,
    /// Number of correct answers
    pub score: usize,
    /// Number of questions in the test
    pub total_questions: usize,
    pub percentage: u32,
    /// Per-domain tallies, ordered by first appearance in the test
    pub domain_scores: Vec<DomainScore>,
    pub completed: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl TestResult {
    /// Mark the result as a completed attempt with its timing
    pub fn finished(mut self, started_at: DateTime<Utc>, ended_at: DateTime<Utc>) -> Self {
        self.completed = true;
        self.started_at = Some(started_at);
        self.ended_at = Some(ended_at);
        self
    }

    /// Tally for a domain name
    pub fn domain(&self, name: &str) -> Option<&DomainScore> {
        self.domain_scores.iter().find(|d| d.domain == name)
    }

    pub fn answer(&self, question_id: u32) -> Option<&UserAnswer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    pub fn band(&self, thresholds: &ScoreThresholds) -> ScoreBand {
        thresholds.band(self.percentage)
    }

    pub fn passed(&self, thresholds: &ScoreThresholds) -> bool {
        thresholds.is_passing(self.percentage)
    }

    /// Number of questions left without a selection
    pub fn unanswered_count(&self) -> usize {
        self.total_questions
            .saturating_sub(self.answers.iter().filter(|a| a.is_answered()).count())
    }

    /// Elapsed attempt time in whole seconds, when timing is known
    pub fn duration_secs(&self) -> Option<i64> {
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) => Some((end - start).num_seconds()),
            _ => None,
        }
    }

    /// Domains below the passing threshold, weakest first.
    ///
    /// Ties keep first-appearance order.
    pub fn weakest_domains(&self, thresholds: &ScoreThresholds) -> Vec<&DomainScore> {
        let mut weak: Vec<&DomainScore> = self
            .domain_scores
            .iter()
            .filter(|d| !thresholds.is_passing(d.percentage))
            .collect();
        weak.sort_by_key(|d| d.percentage);
        weak
    }
}
