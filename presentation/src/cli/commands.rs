//! CLI command definitions

use clap::{Parser, ValueEnum};
use quiz_domain::TestId;
use std::path::PathBuf;

/// Output format for `--list` and line-mode results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored human-readable output
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for quiz_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => quiz_domain::OutputFormat::Text,
            OutputFormat::Json => quiz_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for cert-quiz
#[derive(Parser, Debug)]
#[command(name = "cert-quiz")]
#[command(author, version, about = "Certification exam practice quiz")]
#[command(long_about = r#"
cert-quiz runs timed-free practice tests for a certification exam.

Pick a test, answer one question at a time, check each answer to reveal
its explanation, and finish with a per-domain score breakdown.

Configuration files are loaded from (in priority order):
1. CERT_QUIZ_* environment variables (e.g. CERT_QUIZ_SCORING__PASSING_SCORE=75)
2. --config <path>     Explicit config file
3. ./cert-quiz.toml    Project-level config
4. ~/.config/cert-quiz/config.toml   Global config

Example:
  cert-quiz
  cert-quiz --test 2
  cert-quiz --bank ./my-bank.toml --list
  cert-quiz --plain --output json
"#)]
pub struct Cli {
    /// Start this test immediately instead of showing the selector
    #[arg(short, long, value_name = "ID")]
    pub test: Option<TestId>,

    /// Question bank file (.json or .toml); defaults to the bundled tests
    #[arg(short, long, value_name = "PATH")]
    pub bank: Option<PathBuf>,

    /// List the available tests and exit
    #[arg(short, long)]
    pub list: bool,

    /// Use the line-oriented prompt instead of the full-screen UI
    #[arg(long)]
    pub plain: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["cert-quiz"]);
        assert!(cli.test.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.plain);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "cert-quiz",
            "--test",
            "2",
            "--bank",
            "bank.toml",
            "--plain",
            "-o",
            "json",
            "--no-color",
            "-vv",
        ]);
        assert_eq!(cli.test, Some(2));
        assert_eq!(cli.bank, Some(PathBuf::from("bank.toml")));
        assert!(cli.plain);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rejects_non_numeric_test_id() {
        assert!(Cli::try_parse_from(["cert-quiz", "--test", "first"]).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
