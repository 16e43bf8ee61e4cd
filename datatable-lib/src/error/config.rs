//! Configuration error types

/// Errors produced while loading or validating a [`TableConfig`](crate::config::TableConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The page size must hold at least one row.
    #[error("invalid page size {0}: must be at least 1")]
    InvalidPageSize(usize),

    /// An entry of the page-size selector list holds no rows.
    #[error("invalid page size option {0}: must be at least 1")]
    InvalidPageSizeOption(usize),

    /// The configuration document could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
