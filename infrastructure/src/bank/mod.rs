//! Question bank adapters
//!
//! Implementations of [`QuestionBankPort`](quiz_application::QuestionBankPort):
//!
//! - [`BundledQuestionBank`] - practice tests compiled into the binary
//! - [`FileQuestionBank`] - a `.json` or `.toml` file chosen at startup
//!
//! Both accept the same document shape, either `{ "tests": [...] }` or a bare
//! array of tests (JSON only).

mod bundled;
mod file;

pub use bundled::BundledQuestionBank;
pub use file::FileQuestionBank;

use quiz_domain::Test;
use serde::Deserialize;

/// On-disk bank document
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BankDocument {
    Wrapped { tests: Vec<Test> },
    Bare(Vec<Test>),
}

impl BankDocument {
    fn into_tests(self) -> Vec<Test> {
        match self {
            BankDocument::Wrapped { tests } | BankDocument::Bare(tests) => tests,
        }
    }
}

/// Parse a JSON bank document.
fn parse_json(contents: &str) -> Result<Vec<Test>, String> {
    serde_json::from_str::<BankDocument>(contents)
        .map(BankDocument::into_tests)
        .map_err(|e| e.to_string())
}

/// Parse a TOML bank document (`[[tests]]` tables).
fn parse_toml(contents: &str) -> Result<Vec<Test>, String> {
    #[derive(Deserialize)]
    struct TomlBank {
        tests: Vec<Test>,
    }

    toml::from_str::<TomlBank>(contents)
        .map(|bank| bank.tests)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_TEST: &str = r#"{
        "id": 1,
        "title": "Practice",
        "questions": [{
            "id": 1,
            "domain": "Storage",
            "text": "Which layer stores micro-partitions?",
            "options": [{"id": "A", "text": "Storage"}, {"id": "B", "text": "Compute"}],
            "correctAnswer": "A"
        }]
    }"#;

    #[test]
    fn test_parse_json_wrapped() {
        let tests = parse_json(&format!(r#"{{"tests": [{ONE_TEST}]}}"#)).unwrap();
        assert_eq!(tests.len(), 1);
        assert_eq!(tests[0].questions[0].correct_answer, "A");
    }

    #[test]
    fn test_parse_json_bare_array() {
        let tests = parse_json(&format!("[{ONE_TEST}]")).unwrap();
        assert_eq!(tests[0].title, "Practice");
    }

    #[test]
    fn test_parse_json_rejects_garbage() {
        assert!(parse_json(r#"{"quizzes": []}"#).is_err());
        assert!(parse_json("not json").is_err());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[[tests]]
id = 3
title = "TOML Test"

[[tests.domains]]
id = 1
name = "Security"

[[tests.questions]]
id = 1
domain = "Security"
text = "Which role owns account-level objects?"
correct_answer = "B"
explanation = "ACCOUNTADMIN sits at the top of the role hierarchy."
options = [
    { id = "A", text = "PUBLIC" },
    { id = "B", text = "ACCOUNTADMIN" },
]
"#;
        let tests = parse_toml(toml_str).unwrap();
        assert_eq!(tests[0].id, 3);
        assert_eq!(tests[0].domains[0].name, "Security");
        assert_eq!(tests[0].questions[0].options.len(), 2);
        assert!(tests[0].questions[0].is_correct("B"));
    }
}
