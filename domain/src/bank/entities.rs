//! Question bank entities
//!
//! Tests, questions, options and declared domains are immutable once loaded.
//! They derive `Serialize`/`Deserialize` so the same shapes are used by the
//! bundled dataset, user-supplied bank files and JSON output.

use serde::{Deserialize, Serialize};

/// Identifier of a question, unique within its test
pub type QuestionId = u32;

/// Identifier of a test, unique within a bank
pub type TestId = u32;

/// One selectable answer of a question.
///
/// The identifier is a short label such as `"A"` and is unique within the
/// owning question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
}

impl AnswerOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A multiple-choice question (Entity)
///
/// # Example
///
/// ```
/// use quiz_domain::{AnswerOption, Question};
///
/// let q = Question::new(1, "Storage", "Where is micro-partition metadata kept?")
///     .with_options(vec![
///         AnswerOption::new("A", "In the cloud services layer"),
///         AnswerOption::new("B", "In the virtual warehouse cache"),
///     ])
///     .with_correct_answer("A");
///
/// assert!(q.is_correct("A"));
/// assert!(!q.is_correct("B"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// Free-text domain name; scoring groups on this string.
    pub domain: String,
    pub text: String,
    pub options: Vec<AnswerOption>,
    /// Identifier of the correct option
    #[serde(alias = "correctAnswer")]
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    pub fn new(id: QuestionId, domain: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            domain: domain.into(),
            text: text.into(),
            options: Vec::new(),
            correct_answer: String::new(),
            explanation: String::new(),
        }
    }

    pub fn with_options(mut self, options: Vec<AnswerOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_correct_answer(mut self, option_id: impl Into<String>) -> Self {
        self.correct_answer = option_id.into();
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    /// Whether `option_id` is the correct option
    pub fn is_correct(&self, option_id: &str) -> bool {
        self.correct_answer == option_id
    }

    /// Look up an option by identifier
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn has_option(&self, option_id: &str) -> bool {
        self.option(option_id).is_some()
    }

    /// Position of an option in display order
    pub fn option_index(&self, option_id: &str) -> Option<usize> {
        self.options.iter().position(|o| o.id == option_id)
    }

    /// Find an option whose identifier matches `label` ignoring ASCII case.
    ///
    /// Used by keyboard and line-mode input where the user types `b` for `B`.
    pub fn option_by_label(&self, label: &str) -> Option<&AnswerOption> {
        self.options
            .iter()
            .find(|o| o.id.eq_ignore_ascii_case(label.trim()))
    }
}

/// A declared topic domain of a test.
///
/// Display metadata only: scoring groups by `Question::domain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: u32,
    pub name: String,
}

impl Domain {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A practice test (Aggregate root of the bank)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    pub id: TestId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub domains: Vec<Domain>,
}

impl Test {
    pub fn new(id: TestId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            questions: Vec::new(),
            domains: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = questions;
        self
    }

    pub fn with_domains(mut self, domains: Vec<Domain>) -> Self {
        self.domains = domains;
        self
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Distinct question domain names in first-appearance order
    pub fn question_domains(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for question in &self.questions {
            if !seen.contains(&question.domain.as_str()) {
                seen.push(question.domain.as_str());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question::new(7, "Compute", "Which warehouse size doubles credits?")
            .with_options(vec![
                AnswerOption::new("A", "Each size step"),
                AnswerOption::new("B", "Only X-Large"),
            ])
            .with_correct_answer("A")
            .with_explanation("Each step up doubles credit consumption.")
    }

    #[test]
    fn test_option_lookup() {
        let q = sample_question();
        assert_eq!(q.option("B").map(|o| o.text.as_str()), Some("Only X-Large"));
        assert!(q.option("C").is_none());
        assert_eq!(q.option_index("B"), Some(1));
    }

    #[test]
    fn test_option_by_label_ignores_case() {
        let q = sample_question();
        assert_eq!(q.option_by_label("a").map(|o| o.id.as_str()), Some("A"));
        assert_eq!(q.option_by_label(" b ").map(|o| o.id.as_str()), Some("B"));
        assert!(q.option_by_label("z").is_none());
    }

    #[test]
    fn test_question_domains_first_appearance_order() {
        let test = Test::new(1, "Practice").with_questions(vec![
            Question::new(1, "Storage", "q1"),
            Question::new(2, "Compute", "q2"),
            Question::new(3, "Storage", "q3"),
        ]);
        assert_eq!(test.question_domains(), vec!["Storage", "Compute"]);
    }

    #[test]
    fn test_deserialize_with_optional_fields_missing() {
        let json = r#"{
            "id": 1,
            "title": "Practice Test 1",
            "questions": [{
                "id": 1,
                "domain": "Storage",
                "text": "Pick A",
                "options": [{"id": "A", "text": "a"}, {"id": "B", "text": "b"}],
                "correct_answer": "A"
            }]
        }"#;
        let test: Test = serde_json::from_str(json).unwrap();
        assert_eq!(test.question_count(), 1);
        assert!(test.description.is_empty());
        assert!(test.domains.is_empty());
        assert!(test.questions[0].explanation.is_empty());
    }
}
