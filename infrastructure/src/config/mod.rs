//! Configuration file loading for cert-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `CERT_QUIZ_<SECTION>__<KEY>` (e.g. `CERT_QUIZ_SCORING__PASSING_SCORE=75`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./cert-quiz.toml` or `./.cert-quiz.toml`
//! 4. Global: `$XDG_CONFIG_HOME/cert-quiz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileBankConfig, FileConfig, FileLogConfig, FileOutputConfig, FileOutputFormat,
    FileScoringConfig,
};
pub use loader::{ConfigLoader, ConfigPaths};
