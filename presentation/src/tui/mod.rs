//! TUI (Text User Interface) module for cert-quiz
//!
//! A full-screen terminal UI over a [`QuizSession`](quiz_application::QuizSession)
//! built with ratatui. Exactly one of the selector, question or results
//! screens is drawn at a time.

mod app;
mod mode;
mod state;
mod widgets;

pub use app::{TuiApp, render};
pub use mode::{Action, KeyHandler, View};
pub use state::TuiState;
pub use widgets::MainLayout;
