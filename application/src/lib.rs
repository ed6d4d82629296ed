//! Application layer for cert-quiz
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    clock::{Clock, FixedClock},
    question_bank::{QuestionBankError, QuestionBankPort},
};
pub use use_cases::load_bank::{LoadBankError, LoadBankUseCase, LoadedBank};
pub use use_cases::quiz_controller::{AttemptStatus, IgnoredReason, Outcome, QuizController};
pub use use_cases::quiz_session::{
    ActiveAttempt, FinishedAttempt, QuizSession, Screen, ScreenKind, SessionError,
};
