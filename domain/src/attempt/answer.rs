//! Per-question answer state of an attempt

use crate::bank::entities::{Question, QuestionId};
use serde::{Deserialize, Serialize};

/// The user's answer to one question.
///
/// `is_correct` is derived from `selected_option` and the question's correct
/// option. It is only ever set through [`UserAnswer::select`], so it can never
/// go stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAnswer {
    pub question_id: QuestionId,
    pub selected_option: Option<String>,
    pub is_correct: bool,
}

impl UserAnswer {
    /// A fresh, unanswered entry for `question`
    pub fn unanswered(question: &Question) -> Self {
        Self {
            question_id: question.id,
            selected_option: None,
            is_correct: false,
        }
    }

    /// Record a selection and recompute correctness
    pub fn select(&mut self, question: &Question, option_id: impl Into<String>) {
        let option_id = option_id.into();
        self.is_correct = question.is_correct(&option_id);
        self.selected_option = Some(option_id);
    }

    pub fn is_answered(&self) -> bool {
        self.selected_option.is_some()
    }
}

/// Explicit per-question state.
///
/// ```text
/// Unanswered ──select──▶ Answered(opt) ──check──▶ Checked(opt)
///                          │    ▲
///                          └────┘ select (latest option wins)
/// ```
///
/// `Checked` is terminal: the option can no longer change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "option", rename_all = "snake_case")]
pub enum AnswerState {
    #[default]
    Unanswered,
    Answered(String),
    Checked(String),
}

impl AnswerState {
    /// The selected option, if any
    pub fn selected(&self) -> Option<&str> {
        match self {
            AnswerState::Unanswered => None,
            AnswerState::Answered(opt) | AnswerState::Checked(opt) => Some(opt),
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, AnswerState::Checked(_))
    }

    pub fn is_locked(&self) -> bool {
        self.is_checked()
    }

    /// Transition for a selection. Returns `None` when the state is locked.
    pub fn on_select(&self, option_id: &str) -> Option<AnswerState> {
        match self {
            AnswerState::Checked(_) => None,
            _ => Some(AnswerState::Answered(option_id.to_string())),
        }
    }

    /// Transition for check-answer. Returns `None` when nothing is selected.
    ///
    /// Checking an already-checked question is allowed and keeps it checked.
    pub fn on_check(&self) -> Option<AnswerState> {
        match self {
            AnswerState::Unanswered => None,
            AnswerState::Answered(opt) | AnswerState::Checked(opt) => {
                Some(AnswerState::Checked(opt.clone()))
            }
        }
    }
}

impl std::fmt::Display for AnswerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerState::Unanswered => write!(f, "Unanswered"),
            AnswerState::Answered(opt) => write!(f, "Answered ({opt})"),
            AnswerState::Checked(opt) => write!(f, "Checked ({opt})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::entities::AnswerOption;

    fn question() -> Question {
        Question::new(1, "Storage", "Pick A")
            .with_options(vec![AnswerOption::new("A", "a"), AnswerOption::new("B", "b")])
            .with_correct_answer("A")
    }

    #[test]
    fn test_unanswered_defaults() {
        let answer = UserAnswer::unanswered(&question());
        assert_eq!(answer.question_id, 1);
        assert!(answer.selected_option.is_none());
        assert!(!answer.is_correct);
        assert!(!answer.is_answered());
    }

    #[test]
    fn test_select_recomputes_correctness() {
        let q = question();
        let mut answer = UserAnswer::unanswered(&q);

        answer.select(&q, "A");
        assert!(answer.is_correct);

        answer.select(&q, "B");
        assert_eq!(answer.selected_option.as_deref(), Some("B"));
        assert!(!answer.is_correct);
    }

    #[test]
    fn test_state_transitions() {
        let state = AnswerState::default();
        assert!(state.on_check().is_none());

        let answered = state.on_select("A").unwrap();
        assert_eq!(answered, AnswerState::Answered("A".into()));

        let reselected = answered.on_select("B").unwrap();
        assert_eq!(reselected.selected(), Some("B"));

        let checked = reselected.on_check().unwrap();
        assert!(checked.is_locked());
        assert!(checked.on_select("A").is_none());
        assert_eq!(checked.on_check(), Some(AnswerState::Checked("B".into())));
    }

    #[test]
    fn test_state_serializes_tagged() {
        let json = serde_json::to_string(&AnswerState::Checked("A".into())).unwrap();
        assert_eq!(json, r#"{"state":"checked","option":"A"}"#);
    }
}
