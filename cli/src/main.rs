//! CLI entrypoint for cert-quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use quiz_application::{LoadBankUseCase, QuestionBankPort, QuizSession};
use quiz_domain::Severity;
use quiz_infrastructure::{
    BundledQuestionBank, ConfigLoader, FileConfig, FileQuestionBank, SystemClock,
};
use quiz_presentation::{Cli, OutputConfig, PlainRepl, ReplConfig, TuiApp, formatter_for};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const APP_DIR: &str = "cert-quiz";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // Load configuration before logging so [log] can pick the level and file
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let full_screen = !cli.list && !cli.plain;
    let _log_guard = init_logging(cli.verbose, &config, full_screen)?;

    info!("Starting cert-quiz");

    for issue in config.validate() {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }

    let (thresholds, _) = config.scoring.to_thresholds();
    let output = OutputConfig::resolve(
        config.output.format,
        config.output.color,
        cli.output.map(Into::into),
        cli.no_color,
    );
    output.apply_color();

    // === Dependency Injection ===
    let bank_path = cli.bank.clone().or_else(|| config.bank.resolved_path());
    let bank: Arc<dyn QuestionBankPort> = match bank_path {
        Some(path) => Arc::new(FileQuestionBank::new(path)),
        None => Arc::new(BundledQuestionBank::new()),
    };
    let loaded = LoadBankUseCase::new(bank)
        .execute()
        .context("Failed to load question bank")?;

    let formatter = formatter_for(output.format);

    if cli.list {
        println!("{}", formatter.test_list(&loaded.tests));
        return Ok(());
    }

    let mut session =
        QuizSession::new(loaded.tests, Arc::new(SystemClock)).with_thresholds(thresholds);

    if let Some(id) = cli.test {
        session
            .select_test(id)
            .with_context(|| format!("Cannot start test {id}"))?;
    }

    if cli.plain {
        let repl_config = ReplConfig {
            history_file: dirs::data_dir().map(|d| d.join(APP_DIR).join("history.txt")),
        };
        PlainRepl::new(session, output)
            .with_config(repl_config)
            .run()
            .context("Line mode failed")?;
        return Ok(());
    }

    let mut app = TuiApp::new(session);
    app.run().await.context("Terminal UI failed")?;

    // Leave the final score on the terminal after the alternate screen closes
    let session = app.session();
    if let Some(finished) = session.finished() {
        println!(
            "{}",
            formatter.result(&finished.test, &finished.result, session.thresholds())
        );
    }

    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// The full-screen UI owns stdout/stderr, so its logs go to a file.
fn init_logging(verbose: u8, config: &FileConfig, to_file: bool) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new(config.log.level.as_deref().unwrap_or("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if !to_file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let dir = config
        .log
        .directory
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| dirs::data_dir().map(|d| d.join(APP_DIR).join("logs")))
        .unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&dir, "cert-quiz.log"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}
