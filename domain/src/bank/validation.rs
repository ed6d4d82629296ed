//! Question bank validation.
//!
//! Detects malformed bank data before a test reaches the quiz controller and
//! returns structured issues with severity levels. Errors make a test unusable;
//! warnings are reported and loading continues.
//!
//! # Examples
//!
//! ```
//! use quiz_domain::{AnswerOption, Question, Test};
//! use quiz_domain::bank::validation::{validate_bank, BankIssue};
//!
//! let test = Test::new(1, "Practice").with_questions(vec![
//!     Question::new(1, "Storage", "Pick A")
//!         .with_options(vec![AnswerOption::new("A", "a"), AnswerOption::new("B", "b")])
//!         .with_correct_answer("A"),
//! ]);
//! let issues = validate_bank(&[test]);
//! assert!(!BankIssue::has_errors(&issues));
//! ```

use super::entities::{QuestionId, Test, TestId};
use std::collections::HashSet;

/// Severity level of a bank issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the bank cannot be used.
    Error,
    /// Non-fatal: the bank works but may not display as expected.
    Warning,
}

/// Identifies a specific bank issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankIssueCode {
    /// The bank contains no tests at all.
    EmptyBank,
    /// Two tests share an identifier.
    DuplicateTestId { test: TestId },
    /// A test has no questions.
    EmptyTest { test: TestId },
    /// Two questions of one test share an identifier.
    DuplicateQuestionId { test: TestId, question: QuestionId },
    /// A question has no options.
    NoOptions { test: TestId, question: QuestionId },
    /// Two options of one question share an identifier.
    DuplicateOptionId {
        test: TestId,
        question: QuestionId,
        option: String,
    },
    /// The correct answer does not name one of the question's options.
    CorrectAnswerMissing {
        test: TestId,
        question: QuestionId,
        correct_answer: String,
    },
    /// A question's domain is not among the test's declared domains.
    ///
    /// Scoring still creates a bucket for it.
    UndeclaredDomain {
        test: TestId,
        question: QuestionId,
        domain: String,
    },
}

/// A detected issue in the bank.
#[derive(Debug, Clone)]
pub struct BankIssue {
    pub severity: Severity,
    pub code: BankIssueCode,
    pub message: String,
}

impl BankIssue {
    fn error(code: BankIssueCode, message: String) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message,
        }
    }

    fn warning(code: BankIssueCode, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message,
        }
    }

    /// Check whether any issues are errors (i.e. fatal).
    pub fn has_errors(issues: &[BankIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

/// Validate every test of a bank.
pub fn validate_bank(tests: &[Test]) -> Vec<BankIssue> {
    let mut issues = Vec::new();

    if tests.is_empty() {
        issues.push(BankIssue::error(
            BankIssueCode::EmptyBank,
            "question bank contains no tests".to_string(),
        ));
        return issues;
    }

    let mut seen_tests = HashSet::new();
    for test in tests {
        if !seen_tests.insert(test.id) {
            issues.push(BankIssue::error(
                BankIssueCode::DuplicateTestId { test: test.id },
                format!("test id {} is used more than once", test.id),
            ));
        }
        issues.extend(validate_test(test));
    }

    issues
}

/// Validate a single test.
pub fn validate_test(test: &Test) -> Vec<BankIssue> {
    let mut issues = Vec::new();

    if test.questions.is_empty() {
        issues.push(BankIssue::error(
            BankIssueCode::EmptyTest { test: test.id },
            format!("test {} ('{}') has no questions", test.id, test.title),
        ));
    }

    let declared: HashSet<&str> = test.domains.iter().map(|d| d.name.as_str()).collect();
    let mut seen_questions = HashSet::new();

    for question in &test.questions {
        if !seen_questions.insert(question.id) {
            issues.push(BankIssue::error(
                BankIssueCode::DuplicateQuestionId {
                    test: test.id,
                    question: question.id,
                },
                format!(
                    "test {}: question id {} is used more than once",
                    test.id, question.id
                ),
            ));
        }

        if question.options.is_empty() {
            issues.push(BankIssue::error(
                BankIssueCode::NoOptions {
                    test: test.id,
                    question: question.id,
                },
                format!("test {}: question {} has no options", test.id, question.id),
            ));
        }

        let mut seen_options = HashSet::new();
        for option in &question.options {
            if !seen_options.insert(option.id.as_str()) {
                issues.push(BankIssue::error(
                    BankIssueCode::DuplicateOptionId {
                        test: test.id,
                        question: question.id,
                        option: option.id.clone(),
                    },
                    format!(
                        "test {}: question {} repeats option '{}'",
                        test.id, question.id, option.id
                    ),
                ));
            }
        }

        if !question.options.is_empty() && !question.has_option(&question.correct_answer) {
            issues.push(BankIssue::error(
                BankIssueCode::CorrectAnswerMissing {
                    test: test.id,
                    question: question.id,
                    correct_answer: question.correct_answer.clone(),
                },
                format!(
                    "test {}: question {} marks '{}' correct but has no such option",
                    test.id, question.id, question.correct_answer
                ),
            ));
        }

        if !declared.is_empty() && !declared.contains(question.domain.as_str()) {
            issues.push(BankIssue::warning(
                BankIssueCode::UndeclaredDomain {
                    test: test.id,
                    question: question.id,
                    domain: question.domain.clone(),
                },
                format!(
                    "test {}: question {} uses undeclared domain '{}'",
                    test.id, question.id, question.domain
                ),
            ));
        }
    }

    issues
}
