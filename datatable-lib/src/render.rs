//! Rendering seam between the table and its host.
//!
//! The table never draws anything itself. After each operation it hands the pieces that changed
//! to a [`Renderer`], which owns the actual output (DOM, terminal, test recorder, ...).

use crate::config::Position;
use crate::nav::Navigation;
use crate::paginator::PageRange;
use crate::sort::SortState;

/// A heading cell with its sort state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading label.
    pub label: String,
    /// Sort state of the column; always unsorted when sorting is off.
    pub sort: SortState,
}

/// Model of the rows-per-page selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizeSelector {
    /// Page sizes offered.
    pub options: Vec<usize>,
    /// The current page size, if it is one of the options.
    pub selected: Option<usize>,
}

impl PageSizeSelector {
    /// Builds the selector for the offered sizes and the current page size.
    pub fn new(options: &[usize], page_size: usize) -> Self {
        Self {
            options: options.to_vec(),
            selected: options.contains(&page_size).then_some(page_size),
        }
    }
}

/// Output side of a [`DataTable`](crate::DataTable).
///
/// Only [`render_rows`](Renderer::render_rows), [`render_navigation`](Renderer::render_navigation)
/// and [`render_info`](Renderer::render_info) are required; hosts that show no headings or
/// selector can ignore the rest.
pub trait Renderer<R> {
    /// Replaces the visible body rows with `rows`, the current page.
    fn render_rows(&mut self, rows: &[&R]);

    /// Replaces the pagination links shown at `position`.
    fn render_navigation(&mut self, position: Position, navigation: &Navigation);

    /// Shows the range text, or clears it when `range` is `None`.
    fn render_info(&mut self, range: Option<&PageRange>);

    /// Redraws the heading cells.
    fn render_headings(&mut self, _headings: &[Heading]) {}

    /// Redraws the page-size selector shown at `position`.
    fn render_selector(&mut self, _position: Position, _selector: &PageSizeSelector) {}

    /// Lets the container take its natural height again before a full redraw.
    fn release_height(&mut self) {}

    /// Locks the container at its current height.
    fn lock_height(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_marks_current_size() {
        let selector = PageSizeSelector::new(&[5, 10, 15], 10);
        assert_eq!(selector.selected, Some(10));

        let selector = PageSizeSelector::new(&[5, 10, 15], 7);
        assert_eq!(selector.selected, None);
        assert_eq!(selector.options, vec![5, 10, 15]);
    }
}
