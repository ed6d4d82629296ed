//! Question bank domain
//!
//! The bank is the static, ordered collection of practice tests. Each test
//! holds its questions in display order and a list of declared domains used
//! for display only.

pub mod entities;
pub mod validation;

pub use entities::{AnswerOption, Domain, Question, QuestionId, Test, TestId};
pub use validation::{BankIssue, BankIssueCode, Severity, validate_bank, validate_test};
