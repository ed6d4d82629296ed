//! Quiz session: the top-level screen state of the application.
//!
//! Exactly one of three screens is active at a time:
//!
//! ```text
//!            select_test                  advance on last question
//! Selector ──────────────▶ Quiz(attempt) ─────────────────────────▶ Results
//!    ▲                        │  exit                                 │  │
//!    └────────────────────────┘                                       │  │ retake
//!    ▲                         select_new_test                        │  ▼
//!    └────────────────────────────────────────────────────────────────┘ Quiz (same test)
//! ```
//!
//! The session forwards user intents to the [`QuizController`], scores the
//! attempt when the controller completes, and stamps it with start/end times
//! from the [`Clock`] port.

use super::quiz_controller::{IgnoredReason, Outcome, QuizController};
use crate::ports::clock::Clock;
use chrono::{DateTime, Utc};
use quiz_domain::{DomainError, ScoreThresholds, Test, TestId, TestResult, score};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors from session-level navigation
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("A test is already in progress; exit it first")]
    AttemptInProgress,

    #[error("There is no finished test to retake")]
    NothingToRetake,
}

/// A running attempt and when it started
#[derive(Debug, Clone)]
pub struct ActiveAttempt {
    pub controller: QuizController,
    pub started_at: DateTime<Utc>,
}

/// A scored attempt shown on the results screen
#[derive(Debug, Clone)]
pub struct FinishedAttempt {
    pub test: Arc<Test>,
    pub result: TestResult,
}

/// The screen currently shown
#[derive(Debug, Clone)]
pub enum Screen {
    Selector,
    Quiz(ActiveAttempt),
    Results(FinishedAttempt),
}

/// Discriminant of [`Screen`] for dispatch without borrowing its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Selector,
    Quiz,
    Results,
}

/// Application session over a loaded question bank
pub struct QuizSession {
    tests: Vec<Arc<Test>>,
    screen: Screen,
    thresholds: ScoreThresholds,
    clock: Arc<dyn Clock>,
}

impl QuizSession {
    pub fn new(tests: Vec<Arc<Test>>, clock: Arc<dyn Clock>) -> Self {
        Self {
            tests,
            screen: Screen::Selector,
            thresholds: ScoreThresholds::default(),
            clock,
        }
    }

    /// Set the score thresholds used for pass/band classification
    pub fn with_thresholds(mut self, thresholds: ScoreThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    // ==================== Queries ====================

    pub fn tests(&self) -> &[Arc<Test>] {
        &self.tests
    }

    pub fn test(&self, id: TestId) -> Option<&Arc<Test>> {
        self.tests.iter().find(|t| t.id == id)
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_kind(&self) -> ScreenKind {
        match self.screen {
            Screen::Selector => ScreenKind::Selector,
            Screen::Quiz(_) => ScreenKind::Quiz,
            Screen::Results(_) => ScreenKind::Results,
        }
    }

    pub fn thresholds(&self) -> &ScoreThresholds {
        &self.thresholds
    }

    /// The controller of the running attempt, if any
    pub fn controller(&self) -> Option<&QuizController> {
        match &self.screen {
            Screen::Quiz(attempt) => Some(&attempt.controller),
            _ => None,
        }
    }

    /// The scored attempt, if the results screen is shown
    pub fn finished(&self) -> Option<&FinishedAttempt> {
        match &self.screen {
            Screen::Results(finished) => Some(finished),
            _ => None,
        }
    }

    // ==================== Navigation ====================

    /// Start a fresh attempt on test `id`.
    pub fn select_test(&mut self, id: TestId) -> Result<(), SessionError> {
        if matches!(self.screen, Screen::Quiz(_)) {
            return Err(SessionError::AttemptInProgress);
        }

        let test = self
            .test(id)
            .cloned()
            .ok_or(DomainError::UnknownTest(id))?;
        self.start(test)
    }

    /// Start the same test again from scratch. Results screen only.
    pub fn retake(&mut self) -> Result<(), SessionError> {
        let Screen::Results(finished) = &self.screen else {
            return Err(SessionError::NothingToRetake);
        };
        let test = Arc::clone(&finished.test);
        info!("Retaking test {}", test.id);
        self.start(test)
    }

    /// Drop any attempt or result and return to the selector.
    pub fn select_new_test(&mut self) {
        if let Screen::Quiz(attempt) = &mut self.screen {
            attempt.controller.exit();
        }
        self.screen = Screen::Selector;
    }

    fn start(&mut self, test: Arc<Test>) -> Result<(), SessionError> {
        let controller = QuizController::new(test)?;
        self.screen = Screen::Quiz(ActiveAttempt {
            controller,
            started_at: self.clock.now(),
        });
        Ok(())
    }

    // ==================== Intents ====================

    pub fn select_option(&mut self, option_id: &str) -> Outcome {
        self.drive(|c| c.select_option(option_id))
    }

    pub fn check_answer(&mut self) -> Outcome {
        self.drive(QuizController::check_answer)
    }

    pub fn advance(&mut self) -> Outcome {
        self.drive(QuizController::advance)
    }

    pub fn retreat(&mut self) -> Outcome {
        self.drive(QuizController::retreat)
    }

    pub fn exit_test(&mut self) -> Outcome {
        self.drive(QuizController::exit)
    }

    /// Apply an intent to the running attempt and follow its exit transitions.
    fn drive(&mut self, intent: impl FnOnce(&mut QuizController) -> Outcome) -> Outcome {
        let Screen::Quiz(attempt) = &mut self.screen else {
            return Outcome::Ignored(IgnoredReason::NoActiveAttempt);
        };

        let outcome = intent(&mut attempt.controller);
        match &outcome {
            Outcome::Completed(answers) => {
                let test = attempt.controller.test_handle();
                let started_at = attempt.started_at;
                let result = score(&test, answers).finished(started_at, self.clock.now());
                info!(
                    "Test {} scored {}/{} ({}%)",
                    test.id, result.score, result.total_questions, result.percentage
                );
                self.screen = Screen::Results(FinishedAttempt { test, result });
            }
            Outcome::Exited => {
                self.screen = Screen::Selector;
            }
            Outcome::Applied | Outcome::Ignored(_) => {}
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::clock::FixedClock;
    use chrono::TimeZone;
    use quiz_domain::{AnswerOption, Question};

    fn question(id: u32, domain: &str) -> Question {
        Question::new(id, domain, format!("question {id}"))
            .with_options(vec![AnswerOption::new("A", "a"), AnswerOption::new("B", "b")])
            .with_correct_answer("A")
    }

    fn session() -> QuizSession {
        let storage_compute = Test::new(1, "Practice Test 1")
            .with_questions(vec![question(1, "Storage"), question(2, "Compute")]);
        let other = Test::new(2, "Practice Test 2").with_questions(vec![question(1, "Security")]);
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap());
        QuizSession::new(
            vec![Arc::new(storage_compute), Arc::new(other)],
            Arc::new(clock),
        )
    }

    #[test]
    fn test_starts_on_selector() {
        let s = session();
        assert_eq!(s.screen_kind(), ScreenKind::Selector);
        assert!(s.controller().is_none());
        assert_eq!(s.tests().len(), 2);
    }

    #[test]
    fn test_intents_without_attempt_are_ignored() {
        let mut s = session();
        assert_eq!(
            s.advance(),
            Outcome::Ignored(IgnoredReason::NoActiveAttempt)
        );
        assert_eq!(
            s.select_option("A"),
            Outcome::Ignored(IgnoredReason::NoActiveAttempt)
        );
    }

    #[test]
    fn test_select_unknown_test_fails() {
        let mut s = session();
        let err = s.select_test(99).unwrap_err();
        assert!(matches!(err, SessionError::Domain(DomainError::UnknownTest(99))));
        assert_eq!(s.screen_kind(), ScreenKind::Selector);
    }

    #[test]
    fn test_select_while_in_progress_fails() {
        let mut s = session();
        s.select_test(1).unwrap();
        assert!(matches!(
            s.select_test(2),
            Err(SessionError::AttemptInProgress)
        ));
    }

    #[test]
    fn test_full_attempt_reaches_scored_results() {
        let mut s = session();
        s.select_test(1).unwrap();
        assert_eq!(s.screen_kind(), ScreenKind::Quiz);

        s.select_option("A");
        s.check_answer();
        s.advance();
        s.select_option("B");
        s.check_answer();
        let outcome = s.advance();

        assert!(matches!(outcome, Outcome::Completed(ref a) if a.len() == 2));
        let finished = s.finished().expect("results screen");
        assert_eq!(finished.result.test_id, 1);
        assert_eq!(finished.result.score, 1);
        assert_eq!(finished.result.percentage, 50);
        assert_eq!(finished.result.domain("Storage").map(|d| d.percentage), Some(100));
        assert_eq!(finished.result.domain("Compute").map(|d| d.percentage), Some(0));
        assert!(finished.result.completed);
        assert_eq!(finished.result.duration_secs(), Some(0));
    }

    #[test]
    fn test_completion_happens_once() {
        let mut s = session();
        s.select_test(2).unwrap();
        assert!(matches!(s.advance(), Outcome::Completed(_)));
        assert_eq!(
            s.advance(),
            Outcome::Ignored(IgnoredReason::NoActiveAttempt)
        );
        assert_eq!(s.screen_kind(), ScreenKind::Results);
    }

    #[test]
    fn test_retake_resets_to_fresh_attempt_on_same_test() {
        let mut s = session();
        s.select_test(1).unwrap();
        s.select_option("A");
        s.advance();
        s.advance();
        assert_eq!(s.screen_kind(), ScreenKind::Results);

        s.retake().unwrap();
        let c = s.controller().expect("quiz screen");
        assert_eq!(c.test().id, 1);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.answers().len(), 2);
        assert!(c.answers().iter().all(|a| a.selected_option.is_none()));
    }

    #[test]
    fn test_retake_requires_results() {
        let mut s = session();
        assert!(matches!(s.retake(), Err(SessionError::NothingToRetake)));
        s.select_test(1).unwrap();
        assert!(matches!(s.retake(), Err(SessionError::NothingToRetake)));
    }

    #[test]
    fn test_exit_discards_attempt() {
        let mut s = session();
        s.select_test(1).unwrap();
        s.select_option("A");
        assert_eq!(s.exit_test(), Outcome::Exited);
        assert_eq!(s.screen_kind(), ScreenKind::Selector);

        // Selecting again starts from scratch
        s.select_test(1).unwrap();
        assert_eq!(s.controller().map(|c| c.answered_count()), Some(0));
    }

    #[test]
    fn test_select_new_test_from_results() {
        let mut s = session();
        s.select_test(2).unwrap();
        s.advance();
        s.select_new_test();
        assert_eq!(s.screen_kind(), ScreenKind::Selector);
        assert!(s.finished().is_none());
        s.select_test(2).unwrap();
        assert_eq!(s.screen_kind(), ScreenKind::Quiz);
    }

    #[test]
    fn test_thresholds_builder() {
        let s = session().with_thresholds(ScoreThresholds::new(60, 90));
        assert_eq!(s.thresholds().passing, 60);
    }
}
