//! Column sorting.
//!
//! Rows are split into a numeric and an alphabetic bucket by the content of the sorted column.
//! Each bucket is sorted on its own and the two are concatenated: numbers first when ascending,
//! text first when descending.

mod cell;
mod exchange;

pub use cell::CellValue;

use log::{debug, warn};

use exchange::{Keyed, exchange_sort};

/// Sort direction of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// Sort state of a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    /// The column is not the sort key.
    #[default]
    Unsorted,
    /// The rows are sorted ascending by this column.
    Ascending,
    /// The rows are sorted descending by this column.
    Descending,
}

impl SortState {
    /// Returns the direction, or `None` when unsorted.
    pub fn direction(self) -> Option<SortDirection> {
        match self {
            Self::Unsorted => None,
            Self::Ascending => Some(SortDirection::Ascending),
            Self::Descending => Some(SortDirection::Descending),
        }
    }
}

impl From<SortDirection> for SortState {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => Self::Ascending,
            SortDirection::Descending => Self::Descending,
        }
    }
}

/// Tracks per-column sort state and reorders rows.
///
/// At most one column is sorted at a time; sorting another column resets the previous one.
#[derive(Debug, Clone)]
pub struct Sorter {
    states: Vec<SortState>,
    active: Option<usize>,
}

impl Sorter {
    /// Creates a sorter for `columns` unsorted columns.
    pub fn new(columns: usize) -> Self {
        Self {
            states: vec![SortState::Unsorted; columns],
            active: None,
        }
    }

    /// Number of sortable columns.
    pub fn column_count(&self) -> usize {
        self.states.len()
    }

    /// Sort state of `column`; unknown columns are unsorted.
    pub fn state(&self, column: usize) -> SortState {
        self.states.get(column).copied().unwrap_or_default()
    }

    /// Sort state of every column, in column order.
    pub fn states(&self) -> &[SortState] {
        &self.states
    }

    /// The sorted column and its direction, if any.
    pub fn active(&self) -> Option<(usize, SortDirection)> {
        let column = self.active?;
        self.state(column).direction().map(|direction| (column, direction))
    }

    /// Sorts `rows` by `column` and returns the new direction.
    ///
    /// The direction toggles: a column sorted ascending becomes descending, anything else
    /// becomes ascending. `cell_text` extracts the column's text for a row. An unknown column
    /// leaves everything untouched and returns `None`.
    pub fn sort<T, F>(
        &mut self,
        column: usize,
        rows: &mut Vec<T>,
        mut cell_text: F,
    ) -> Option<SortDirection>
    where
        F: FnMut(&T) -> String,
    {
        if column >= self.states.len() {
            warn!(
                "Ignoring sort on column {} ({} columns)",
                column,
                self.states.len()
            );
            return None;
        }

        let mut numeric = Vec::new();
        let mut alphabetic = Vec::new();
        for row in rows.drain(..) {
            match CellValue::classify(&cell_text(&row)) {
                CellValue::Numeric(key) => numeric.push(Keyed { key, row }),
                CellValue::Alphabetic(key) => alphabetic.push(Keyed { key, row }),
            }
        }

        let direction = match self.state(column) {
            SortState::Ascending => SortDirection::Descending,
            SortState::Unsorted | SortState::Descending => SortDirection::Ascending,
        };
        exchange_sort(&mut numeric, direction);
        exchange_sort(&mut alphabetic, direction);

        debug!(
            "Sorting column {} {:?}: {} numeric, {} alphabetic",
            column,
            direction,
            numeric.len(),
            alphabetic.len()
        );

        match direction {
            SortDirection::Ascending => {
                rows.extend(numeric.into_iter().map(|entry| entry.row));
                rows.extend(alphabetic.into_iter().map(|entry| entry.row));
            }
            SortDirection::Descending => {
                rows.extend(alphabetic.into_iter().map(|entry| entry.row));
                rows.extend(numeric.into_iter().map(|entry| entry.row));
            }
        }

        if let Some(previous) = self.active.filter(|&previous| previous != column) {
            self.states[previous] = SortState::Unsorted;
        }
        self.states[column] = direction.into();
        self.active = Some(column);

        Some(direction)
    }
}
