//! Table sources captured at setup.

use serde::{Deserialize, Serialize};

use super::TableRow;

/// Anything a [`DataTable`](crate::DataTable) can be set up from.
///
/// A source exposes the element it came from, its heading cells and its body rows. Rows are
/// handed over once; the table keeps them for its whole lifetime.
pub trait TableSource {
    /// Record type of the body rows.
    type Row: TableRow;

    /// Element name of the source (`"table"` for a real table).
    fn tag_name(&self) -> &str;

    /// Heading labels, or `None` if the table has no header.
    fn headings(&self) -> Option<&[String]>;

    /// Consumes the source and returns its body rows in document order.
    fn into_rows(self) -> Vec<Self::Row>;
}

fn default_tag() -> String {
    "table".to_string()
}

/// An in-memory table.
///
/// Deserializes from documents such as
/// `{"headings": ["Name", "Price"], "rows": [["Ann", "$5"]]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticTable<R> {
    #[serde(default = "default_tag")]
    tag: String,
    #[serde(default)]
    headings: Option<Vec<String>>,
    rows: Vec<R>,
}

impl<R> StaticTable<R> {
    /// Creates a headerless table from body rows.
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            tag: default_tag(),
            headings: None,
            rows,
        }
    }

    /// Sets the heading labels.
    pub fn with_headings<I, S>(mut self, headings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headings = Some(headings.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the element name reported to the table.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Returns the body rows.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }
}

impl<R: TableRow> TableSource for StaticTable<R> {
    type Row = R;

    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn headings(&self) -> Option<&[String]> {
        self.headings.as_deref()
    }

    fn into_rows(self) -> Vec<R> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults_tag() {
        let table: StaticTable<Vec<String>> =
            serde_json::from_str(r#"{"headings": ["Name"], "rows": [["Ann"], ["Bob"]]}"#).unwrap();
        assert_eq!(table.tag_name(), "table");
        assert_eq!(table.headings(), Some(&["Name".to_string()][..]));
        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn test_builder() {
        let table = StaticTable::new(vec![vec!["a"]])
            .with_headings(["Letter"])
            .with_tag("div");
        assert_eq!(table.tag_name(), "div");
        assert_eq!(table.into_rows(), vec![vec!["a"]]);
    }
}
