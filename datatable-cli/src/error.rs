//! CLI error types

use std::path::PathBuf;

use datatable_lib::error::{ConfigError, SetupError};

/// Errors that stop the CLI before the table is shown.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid table document {path}: {source}")]
    Document {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        source: ConfigError,
    },

    #[error("cannot set up table: {0}")]
    Setup(#[from] SetupError),

    #[error("cannot initialize logging: {0}")]
    Logging(String),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
