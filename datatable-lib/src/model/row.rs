//! Row handles and the [`TableRow`] trait.

use std::borrow::Cow;

/// Opaque handle to a host record.
///
/// The table only ever reorders handles; the records they point at stay where the host put them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(usize);

impl RowId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the record in the order it was captured at setup.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row#{}", self.0)
    }
}

/// Trait for records displayed as table rows.
///
/// Only the text content of a cell is needed: sorting classifies cells by it.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use datatable_lib::model::TableRow;
///
/// struct Invoice {
///     customer: String,
///     amount: u32,
/// }
///
/// impl TableRow for Invoice {
///     fn cell_text(&self, column: usize) -> Option<Cow<'_, str>> {
///         match column {
///             0 => Some(Cow::Borrowed(&self.customer)),
///             1 => Some(Cow::Owned(format!("${}", self.amount))),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow {
    /// Text content of the cell at `column`, or `None` if the row has no such cell.
    fn cell_text(&self, column: usize) -> Option<Cow<'_, str>>;
}

impl TableRow for Vec<String> {
    fn cell_text(&self, column: usize) -> Option<Cow<'_, str>> {
        self.get(column).map(|cell| Cow::Borrowed(cell.as_str()))
    }
}

impl TableRow for Vec<&str> {
    fn cell_text(&self, column: usize) -> Option<Cow<'_, str>> {
        self.get(column).map(|cell| Cow::Borrowed(*cell))
    }
}
