//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "datatable",
    version,
    about = "Page through and sort a table document from the terminal"
)]
pub struct Cli {
    /// JSON table document: {"headings": [...], "rows": [[...], ...]}.
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// JSON table configuration. Missing fields take their defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Rows per page (overrides the config file).
    #[arg(long, value_name = "ROWS")]
    pub per_page: Option<usize>,

    /// Make the headings sortable (overrides the config file).
    #[arg(long)]
    pub sortable: bool,

    /// Log file.
    #[arg(long, value_name = "PATH", default_value = "datatable.log")]
    pub log_file: PathBuf,

    /// Log level.
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
