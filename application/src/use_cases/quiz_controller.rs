//! Quiz progression controller.
//!
//! Drives one attempt over one test, one question at a time:
//!
//! ```text
//! select_option ──▶ Answered ──check_answer──▶ Checked (explanation revealed)
//!                                                │
//!            retreat ◀──────────────────────────┤
//!                                                ▼
//!                                   advance ──▶ next question
//!                                          └──▶ Completed(answers)   (last question)
//! exit ──▶ Exited                                                    (any time)
//! ```
//!
//! Invalid intents never fail: they come back as [`Outcome::Ignored`] with a
//! reason and leave the state untouched.

use quiz_domain::{AnswerState, DomainError, Question, Test, UserAnswer, fresh_answers};
use std::sync::Arc;
use tracing::{debug, info};

/// Why an intent had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// The current question has been checked; its answer can no longer change
    AnswerLocked,
    /// The option id does not belong to the current question
    UnknownOption,
    /// Check-answer needs a selected option
    NothingSelected,
    /// Retreat at the first question
    AtFirstQuestion,
    /// The attempt already completed or was abandoned
    AttemptFinished,
    /// No attempt is running (session level)
    NoActiveAttempt,
}

impl std::fmt::Display for IgnoredReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IgnoredReason::AnswerLocked => "answer is locked after checking",
            IgnoredReason::UnknownOption => "no such option for this question",
            IgnoredReason::NothingSelected => "select an option first",
            IgnoredReason::AtFirstQuestion => "already at the first question",
            IgnoredReason::AttemptFinished => "attempt is already finished",
            IgnoredReason::NoActiveAttempt => "no test in progress",
        };
        write!(f, "{}", text)
    }
}

/// Result of applying an intent to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The intent changed the attempt state
    Applied,
    /// The intent was a no-op
    Ignored(IgnoredReason),
    /// Advance past the last question: the finished answer set, one entry per
    /// question in test order. Emitted once per attempt.
    Completed(Vec<UserAnswer>),
    /// The attempt was abandoned
    Exited,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored(_))
    }
}

/// Lifecycle of an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptStatus {
    Active,
    Completed,
    Abandoned,
}

/// Controller for a single quiz attempt
#[derive(Debug, Clone)]
pub struct QuizController {
    test: Arc<Test>,
    index: usize,
    answers: Vec<UserAnswer>,
    states: Vec<AnswerState>,
    revealed: bool,
    status: AttemptStatus,
}

impl QuizController {
    /// Start a fresh attempt: every question unanswered, first question active.
    pub fn new(test: Arc<Test>) -> Result<Self, DomainError> {
        if test.questions.is_empty() {
            return Err(DomainError::EmptyTest(test.id));
        }

        let answers = fresh_answers(&test);
        let states = vec![AnswerState::Unanswered; answers.len()];

        info!(
            "Starting attempt on test {} ({} questions)",
            test.id,
            test.question_count()
        );

        Ok(Self {
            test,
            index: 0,
            answers,
            states,
            revealed: false,
            status: AttemptStatus::Active,
        })
    }

    // ==================== Read-only views ====================

    pub fn test(&self) -> &Test {
        &self.test
    }

    /// Shared handle to the test under attempt
    pub fn test_handle(&self) -> Arc<Test> {
        Arc::clone(&self.test)
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.test.questions.len()
    }

    pub fn current_question(&self) -> &Question {
        &self.test.questions[self.index]
    }

    pub fn current_answer(&self) -> &UserAnswer {
        &self.answers[self.index]
    }

    pub fn current_state(&self) -> &AnswerState {
        &self.states[self.index]
    }

    pub fn state_at(&self, index: usize) -> Option<&AnswerState> {
        self.states.get(index)
    }

    pub fn answers(&self) -> &[UserAnswer] {
        &self.answers
    }

    /// Whether the current question's explanation is shown
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// `(index + 1) / total`
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.total() as f64
    }

    pub fn is_first_question(&self) -> bool {
        self.index == 0
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 == self.total()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_answered()).count()
    }

    /// Whether check-answer would do anything right now
    pub fn can_check(&self) -> bool {
        self.is_active() && self.current_state().selected().is_some()
    }

    pub fn status(&self) -> AttemptStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == AttemptStatus::Active
    }

    // ==================== Intents ====================

    /// Select an option for the current question.
    ///
    /// Rejected once the question is checked or while its explanation is
    /// revealed. Never moves the index or the reveal flag.
    pub fn select_option(&mut self, option_id: &str) -> Outcome {
        if !self.is_active() {
            return self.ignore("select", IgnoredReason::AttemptFinished);
        }
        if self.revealed {
            return self.ignore("select", IgnoredReason::AnswerLocked);
        }

        let question = &self.test.questions[self.index];
        if !question.has_option(option_id) {
            return self.ignore("select", IgnoredReason::UnknownOption);
        }

        let Some(next) = self.states[self.index].on_select(option_id) else {
            return self.ignore("select", IgnoredReason::AnswerLocked);
        };

        self.answers[self.index].select(question, option_id);
        self.states[self.index] = next;
        debug!(
            "Question {} answered with {} (correct: {})",
            question.id, option_id, self.answers[self.index].is_correct
        );
        Outcome::Applied
    }

    /// Reveal the explanation for the current question and lock its answer.
    pub fn check_answer(&mut self) -> Outcome {
        if !self.is_active() {
            return self.ignore("check", IgnoredReason::AttemptFinished);
        }

        let Some(next) = self.states[self.index].on_check() else {
            return self.ignore("check", IgnoredReason::NothingSelected);
        };

        self.states[self.index] = next;
        self.revealed = true;
        debug!("Question {} checked", self.current_question().id);
        Outcome::Applied
    }

    /// Move to the next question, or complete the attempt on the last one.
    pub fn advance(&mut self) -> Outcome {
        if !self.is_active() {
            return self.ignore("advance", IgnoredReason::AttemptFinished);
        }

        self.revealed = false;

        if !self.is_last_question() {
            self.index += 1;
            return Outcome::Applied;
        }

        self.status = AttemptStatus::Completed;
        info!(
            "Attempt on test {} completed ({}/{} answered)",
            self.test.id,
            self.answered_count(),
            self.total()
        );
        Outcome::Completed(self.answers.clone())
    }

    /// Move back one question. No-op at the first question.
    pub fn retreat(&mut self) -> Outcome {
        if !self.is_active() {
            return self.ignore("retreat", IgnoredReason::AttemptFinished);
        }
        if self.is_first_question() {
            return self.ignore("retreat", IgnoredReason::AtFirstQuestion);
        }

        self.revealed = false;
        self.index -= 1;
        Outcome::Applied
    }

    /// Abandon the attempt regardless of progress.
    pub fn exit(&mut self) -> Outcome {
        self.status = AttemptStatus::Abandoned;
        self.revealed = false;
        info!(
            "Attempt on test {} abandoned at question {}/{}",
            self.test.id,
            self.index + 1,
            self.total()
        );
        Outcome::Exited
    }

    fn ignore(&self, intent: &str, reason: IgnoredReason) -> Outcome {
        debug!("Ignoring {} on question {}: {}", intent, self.index + 1, reason);
        Outcome::Ignored(reason)
    }
}
