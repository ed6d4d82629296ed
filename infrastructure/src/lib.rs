//! Infrastructure layer for cert-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod bank;
pub mod clock;
pub mod config;

// Re-export commonly used types
pub use bank::{BundledQuestionBank, FileQuestionBank};
pub use clock::SystemClock;
pub use config::{
    ConfigLoader, ConfigPaths, FileBankConfig, FileConfig, FileLogConfig, FileOutputConfig,
    FileOutputFormat, FileScoringConfig,
};
