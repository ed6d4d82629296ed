//! Line-oriented quiz mode (`--plain`)
//!
//! Runs the same [`QuizSession`](quiz_application::QuizSession) as the
//! full-screen UI through a reedline prompt, printing with the console
//! formatter.

mod command;
mod repl;

pub use command::PlainCommand;
pub use repl::{Flow, PlainRepl};
