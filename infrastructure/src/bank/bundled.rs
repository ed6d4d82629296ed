//! Practice tests compiled into the binary

use quiz_application::{QuestionBankError, QuestionBankPort};
use quiz_domain::Test;

const BUNDLED_TESTS: &str = include_str!("../../data/bundled_tests.json");

/// Question bank backed by the bundled practice tests
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledQuestionBank;

impl BundledQuestionBank {
    pub fn new() -> Self {
        Self
    }
}

impl QuestionBankPort for BundledQuestionBank {
    fn load_tests(&self) -> Result<Vec<Test>, QuestionBankError> {
        super::parse_json(BUNDLED_TESTS).map_err(|message| QuestionBankError::Parse {
            source_name: self.source_name(),
            message,
        })
    }

    fn source_name(&self) -> String {
        "bundled tests".to_string()
    }
}
