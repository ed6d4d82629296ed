//! Question bank loaded from a file on disk

use quiz_application::{QuestionBankError, QuestionBankPort};
use quiz_domain::Test;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Question bank read from a `.json` or `.toml` file.
///
/// The file is read on every [`load_tests`](QuestionBankPort::load_tests)
/// call; the session loads once at startup.
#[derive(Debug, Clone)]
pub struct FileQuestionBank {
    path: PathBuf,
}

/// Supported bank file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BankFormat {
    Json,
    Toml,
}

impl FileQuestionBank {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format(&self) -> Result<BankFormat, QuestionBankError> {
        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(BankFormat::Json),
            Some("toml") => Ok(BankFormat::Toml),
            _ => Err(QuestionBankError::UnsupportedFormat(
                self.path.display().to_string(),
            )),
        }
    }
}

impl QuestionBankPort for FileQuestionBank {
    fn load_tests(&self) -> Result<Vec<Test>, QuestionBankError> {
        let format = self.format()?;
        debug!("Reading {:?} bank from {}", format, self.path.display());

        let contents = fs::read_to_string(&self.path).map_err(|e| QuestionBankError::Read {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let parsed = match format {
            BankFormat::Json => super::parse_json(&contents),
            BankFormat::Toml => super::parse_toml(&contents),
        };

        parsed.map_err(|message| QuestionBankError::Parse {
            source_name: self.source_name(),
            message,
        })
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANK_JSON: &str = r#"{"tests": [{
        "id": 7,
        "title": "From file",
        "questions": [{
            "id": 1,
            "domain": "Compute",
            "text": "What scales a warehouse out?",
            "options": [{"id": "A", "text": "Multi-cluster"}, {"id": "B", "text": "Resize"}],
            "correct_answer": "A"
        }]
    }]}"#;

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.json");
        fs::write(&path, BANK_JSON).unwrap();

        let tests = FileQuestionBank::new(&path).load_tests().unwrap();
        assert_eq!(tests.len(), 1);
        assert_eq!(tests[0].id, 7);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("BANK.JSON");
        fs::write(&path, BANK_JSON).unwrap();
        assert!(FileQuestionBank::new(&path).load_tests().is_ok());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let bank = FileQuestionBank::new(dir.path().join("absent.json"));
        assert!(matches!(
            bank.load_tests(),
            Err(QuestionBankError::Read { .. })
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let bank = FileQuestionBank::new("questions.yaml");
        assert!(matches!(
            bank.load_tests(),
            Err(QuestionBankError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_malformed_contents_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.toml");
        fs::write(&path, "tests = 3").unwrap();

        let err = FileQuestionBank::new(&path).load_tests().unwrap_err();
        assert!(matches!(err, QuestionBankError::Parse { .. }));
        assert!(err.to_string().contains("bank.toml"));
    }
}
