//! Load Bank use case.
//!
//! Reads the tests through a [`QuestionBankPort`], validates them, and hands
//! back shareable test handles. Validation errors abort loading; warnings
//! (such as a question whose domain is not declared on its test) are logged
//! and returned so the presentation layer can surface them.

use crate::ports::question_bank::{QuestionBankError, QuestionBankPort};
use quiz_domain::{BankIssue, Severity, Test, validate_bank};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading the bank.
#[derive(Error, Debug)]
pub enum LoadBankError {
    #[error(transparent)]
    Source(#[from] QuestionBankError),

    #[error("Question bank {source_name} has {} error(s):\n{}", .issues.len(), format_issues(.issues))]
    Invalid {
        source_name: String,
        issues: Vec<BankIssue>,
    },
}

fn format_issues(issues: &[BankIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("  - {}", i.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A validated bank ready for a session
#[derive(Debug, Clone)]
pub struct LoadedBank {
    pub tests: Vec<Arc<Test>>,
    pub warnings: Vec<BankIssue>,
}

/// Use case for loading and validating the question bank.
pub struct LoadBankUseCase {
    bank: Arc<dyn QuestionBankPort>,
}

impl LoadBankUseCase {
    pub fn new(bank: Arc<dyn QuestionBankPort>) -> Self {
        Self { bank }
    }

    pub fn execute(&self) -> Result<LoadedBank, LoadBankError> {
        let source_name = self.bank.source_name();
        let tests = self.bank.load_tests()?;

        let (errors, warnings): (Vec<BankIssue>, Vec<BankIssue>) = validate_bank(&tests)
            .into_iter()
            .partition(|issue| issue.severity == Severity::Error);

        if !errors.is_empty() {
            return Err(LoadBankError::Invalid {
                source_name,
                issues: errors,
            });
        }

        for issue in &warnings {
            warn!("{}", issue.message);
        }

        info!(
            "Loaded {} test(s) from {} ({} warning(s))",
            tests.len(),
            source_name,
            warnings.len()
        );

        Ok(LoadedBank {
            tests: tests.into_iter().map(Arc::new).collect(),
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{AnswerOption, BankIssueCode, Domain, Question};

    struct StubBank(Result<Vec<Test>, String>);

    impl QuestionBankPort for StubBank {
        fn load_tests(&self) -> Result<Vec<Test>, QuestionBankError> {
            self.0.clone().map_err(|message| QuestionBankError::Read {
                path: "stub".to_string(),
                message,
            })
        }

        fn source_name(&self) -> String {
            "stub".to_string()
        }
    }

    fn question(id: u32, domain: &str) -> Question {
        Question::new(id, domain, "prompt")
            .with_options(vec![AnswerOption::new("A", "a"), AnswerOption::new("B", "b")])
            .with_correct_answer("A")
    }

    fn load(result: Result<Vec<Test>, String>) -> Result<LoadedBank, LoadBankError> {
        LoadBankUseCase::new(Arc::new(StubBank(result))).execute()
    }

    #[test]
    fn test_loads_valid_bank() {
        let test = Test::new(1, "Practice").with_questions(vec![question(1, "Storage")]);
        let bank = load(Ok(vec![test])).unwrap();
        assert_eq!(bank.tests.len(), 1);
        assert!(bank.warnings.is_empty());
    }

    #[test]
    fn test_warnings_do_not_abort() {
        let test = Test::new(1, "Practice")
            .with_questions(vec![question(1, "Sharing")])
            .with_domains(vec![Domain::new(1, "Storage")]);
        let bank = load(Ok(vec![test])).unwrap();
        assert_eq!(bank.warnings.len(), 1);
        assert!(matches!(
            bank.warnings[0].code,
            BankIssueCode::UndeclaredDomain { .. }
        ));
    }

    #[test]
    fn test_errors_abort_with_all_issues() {
        let broken = Test::new(1, "Broken")
            .with_questions(vec![question(1, "Storage").with_correct_answer("Q")]);
        let empty = Test::new(2, "Empty");

        let err = load(Ok(vec![broken, empty])).unwrap_err();
        match err {
            LoadBankError::Invalid { issues, .. } => assert_eq!(issues.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_source_error_propagates() {
        let err = load(Err("permission denied".to_string())).unwrap_err();
        assert!(matches!(err, LoadBankError::Source(_)));
        assert!(err.to_string().contains("permission denied"));
    }
}
