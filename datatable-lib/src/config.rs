//! Table configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where a control is placed relative to the table body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Above the table.
    Top,
    /// Below the table.
    Bottom,
    /// Both above and below the table.
    #[default]
    Both,
}

impl Position {
    /// Returns `true` if a control at this position appears above the table.
    pub fn includes_top(self) -> bool {
        matches!(self, Self::Top | Self::Both)
    }

    /// Returns `true` if a control at this position appears below the table.
    pub fn includes_bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::Both)
    }
}

/// How the previous/next controls look when they cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnusedNavs {
    /// Keep the control visible but disabled.
    #[default]
    Disable,
    /// Hide the control.
    Hide,
}

/// Configuration for a [`DataTable`](crate::DataTable).
///
/// Every field has a default, so a partial JSON document is enough.
///
/// # Example
///
/// ```
/// use datatable_lib::config::{Position, TableConfig};
///
/// let config = TableConfig::default()
///     .with_per_page(25)
///     .with_nav_position(Position::Bottom)
///     .with_sortable(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page.
    ///
    /// Default: 10
    pub per_page: usize,

    /// Placement of the pagination links.
    ///
    /// Default: both
    pub nav_position: Position,

    /// Placement of the page-size selector.
    ///
    /// Default: top
    pub selector_position: Position,

    /// Whether previous/next links are generated.
    pub next_prev: bool,

    /// Label of the previous link.
    pub prev_text: String,

    /// Label of the next link.
    pub next_text: String,

    /// Whether column headings sort the table when clicked.
    pub sortable: bool,

    /// Whether the table container height is locked between redraws.
    pub fixed_height: bool,

    /// Whether the "Showing x to y of z rows" text is displayed.
    pub info: bool,

    /// Whether the info text is shown when everything fits on one page.
    pub info_on_single_page: bool,

    /// Look of previous/next links that cannot be used.
    pub unused_navs: UnusedNavs,

    /// Page sizes offered by the selector.
    pub per_page_select: Vec<usize>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            per_page: 10,
            nav_position: Position::Both,
            selector_position: Position::Top,
            next_prev: true,
            prev_text: "‹".to_string(),
            next_text: "›".to_string(),
            sortable: false,
            fixed_height: true,
            info: true,
            info_on_single_page: false,
            unused_navs: UnusedNavs::Disable,
            per_page_select: vec![5, 10, 15, 20, 25],
        }
    }
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from a JSON document. Missing fields take their defaults.
    ///
    /// The result is validated before it is returned.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values that would leave the table unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page < 1 {
            return Err(ConfigError::InvalidPageSize(self.per_page));
        }
        if let Some(&bad) = self.per_page_select.iter().find(|&&size| size < 1) {
            return Err(ConfigError::InvalidPageSizeOption(bad));
        }
        Ok(())
    }

    /// Sets the rows per page.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Sets the placement of the pagination links.
    pub fn with_nav_position(mut self, position: Position) -> Self {
        self.nav_position = position;
        self
    }

    /// Sets the placement of the page-size selector.
    pub fn with_selector_position(mut self, position: Position) -> Self {
        self.selector_position = position;
        self
    }

    /// Enables or disables the previous/next links.
    pub fn with_next_prev(mut self, enabled: bool) -> Self {
        self.next_prev = enabled;
        self
    }

    /// Sets the previous/next link labels.
    pub fn with_nav_labels(mut self, prev: impl Into<String>, next: impl Into<String>) -> Self {
        self.prev_text = prev.into();
        self.next_text = next.into();
        self
    }

    /// Enables or disables sortable headings.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Enables or disables the fixed-height layout.
    pub fn with_fixed_height(mut self, fixed: bool) -> Self {
        self.fixed_height = fixed;
        self
    }

    /// Enables or disables the info text.
    pub fn with_info(mut self, info: bool) -> Self {
        self.info = info;
        self
    }

    /// Shows the info text even when there is a single page.
    pub fn with_info_on_single_page(mut self, show: bool) -> Self {
        self.info_on_single_page = show;
        self
    }

    /// Sets how unusable previous/next links are displayed.
    pub fn with_unused_navs(mut self, policy: UnusedNavs) -> Self {
        self.unused_navs = policy;
        self
    }

    /// Sets the page sizes offered by the selector.
    pub fn with_per_page_select(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.per_page_select = sizes.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.per_page, 10);
        assert_eq!(config.nav_position, Position::Both);
        assert!(config.next_prev);
        assert!(!config.sortable);
        assert!(config.fixed_height);
        assert!(config.info);
        assert_eq!(config.unused_navs, UnusedNavs::Disable);
        assert_eq!(config.per_page_select, vec![5, 10, 15, 20, 25]);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            TableConfig::from_json(r#"{"per_page": 3, "sortable": true, "unused_navs": "hide"}"#)
                .unwrap();
        assert_eq!(config.per_page, 3);
        assert!(config.sortable);
        assert_eq!(config.unused_navs, UnusedNavs::Hide);
        assert_eq!(config.prev_text, "‹");
        assert_eq!(config.nav_position, Position::Both);
    }

    #[test]
    fn test_rejects_zero_page_size() {
        assert!(matches!(
            TableConfig::from_json(r#"{"per_page": 0}"#),
            Err(ConfigError::InvalidPageSize(0))
        ));
        assert!(matches!(
            TableConfig::default().with_per_page_select(vec![5, 0]).validate(),
            Err(ConfigError::InvalidPageSizeOption(0))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            TableConfig::from_json("{per_page: 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_position_sides() {
        assert!(Position::Top.includes_top());
        assert!(!Position::Top.includes_bottom());
        assert!(Position::Both.includes_top() && Position::Both.includes_bottom());
        assert!(Position::Bottom.includes_bottom());
    }
}
