//! Presentation layer for cert-quiz
//!
//! This crate contains CLI definitions, output formatters,
//! the full-screen TUI and the line-oriented prompt.

pub mod cli;
pub mod config;
pub mod output;
pub mod plain;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, formatter_for};
pub use output::json::JsonFormatter;
pub use plain::{PlainCommand, PlainRepl};
pub use tui::TuiApp;
