//! Domain layer for cert-quiz
//!
//! This crate contains the question bank entities, the per-attempt answer
//! state and the scoring engine. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Bank
//!
//! A bank is an ordered list of [`Test`]s. Each test holds questions grouped
//! by a free-text domain name.
//!
//! ## Attempt
//!
//! One run through a test. Every question has exactly one [`UserAnswer`] and
//! an explicit [`AnswerState`] (`Unanswered → Answered → Checked`).
//!
//! ## Scoring
//!
//! [`score`] aggregates an answer set into an overall percentage and a
//! per-domain breakdown.

pub mod attempt;
pub mod bank;
pub mod config;
pub mod core;
pub mod scoring;

// Re-export commonly used types
pub use attempt::{AnswerState, UserAnswer, fresh_answers};
pub use bank::{
    AnswerOption, BankIssue, BankIssueCode, Domain, Question, QuestionId, Severity, Test, TestId,
    validate_bank, validate_test,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat};
pub use core::error::DomainError;
pub use scoring::{DomainScore, ScoreBand, ScoreThresholds, TestResult, percentage, score};
