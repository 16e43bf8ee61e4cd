//! Setup error types

use super::ConfigError;

/// Errors reported once, while a [`DataTable`](crate::DataTable) is being set up.
///
/// A table that fails setup is never constructed, so no further work happens on it.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The source element is not a table.
    #[error("the selected element ({0}) is not a table")]
    NotATable(String),

    /// Sorting was requested but the table has no heading cells.
    #[error("the sortable option requires table headings")]
    MissingHeadings,

    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SetupError {
    /// Returns `true` if the error comes from the configuration rather than the table itself.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
