//! Pagination state machine.
//!
//! The [`Paginator`] owns the canonical row order and derives pages from it on demand:
//! a page is always a slice of the row set, never a separate copy.

use std::slice::Chunks;

use log::{debug, warn};

use crate::error::ConfigError;

/// A page move requested by a navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageTarget {
    /// A numbered page (1-based).
    Page(usize),
    /// The page before the current one.
    Previous,
    /// The page after the current one.
    Next,
}

/// Snapshot of the pagination position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// Current page, 1-based. Meaningless when `total_pages` is 0.
    pub current_page: usize,
    /// Number of pages.
    pub total_pages: usize,
    /// Number of rows across all pages.
    pub total_items: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl PaginationState {
    /// Returns `true` on the first page.
    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    /// Returns `true` on the last page, or when there are no pages at all.
    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }
}

/// Ordinals of the rows shown on the current page.
///
/// Displays as `Showing {first} to {last} of {total} rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    /// 1-based ordinal of the first row on the page.
    pub first: usize,
    /// 1-based ordinal of the last row on the page.
    pub last: usize,
    /// Number of rows across all pages.
    pub total: usize,
}

impl std::fmt::Display for PageRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} rows",
            self.first, self.last, self.total
        )
    }
}

/// Splits a row set into fixed-size pages and tracks the current one.
///
/// # Example
///
/// ```
/// use datatable_lib::paginator::{PageTarget, Paginator};
///
/// let mut paginator = Paginator::new((1..=25).collect::<Vec<u32>>(), 10).unwrap();
/// assert_eq!(paginator.total_pages(), 3);
///
/// paginator.go_to_page(PageTarget::Next);
/// assert_eq!(paginator.current_page(), &[11, 12, 13, 14, 15, 16, 17, 18, 19, 20]);
/// ```
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    rows: Vec<T>,
    page_size: usize,
    current: usize,
}

impl<T> Paginator<T> {
    /// Creates a paginator positioned on the first page.
    ///
    /// Fails if `page_size` is 0.
    pub fn new(rows: Vec<T>, page_size: usize) -> Result<Self, ConfigError> {
        if page_size < 1 {
            return Err(ConfigError::InvalidPageSize(page_size));
        }
        Ok(Self {
            rows,
            page_size,
            current: 1,
        })
    }

    /// Returns the canonical row order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Consumes the paginator and returns the row set.
    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }

    /// Replaces the row set, re-derives the pages and returns to the first page.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.current = 1;
        debug!(
            "Row set replaced: {} rows over {} pages",
            self.rows.len(),
            self.total_pages()
        );
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of rows across all pages.
    pub fn total_items(&self) -> usize {
        self.rows.len()
    }

    /// Number of pages; 0 for an empty row set.
    pub fn total_pages(&self) -> usize {
        self.rows.len().div_ceil(self.page_size)
    }

    /// Current page number, 1-based.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns `true` on the first page.
    pub fn is_first_page(&self) -> bool {
        self.state().is_first_page()
    }

    /// Returns `true` on the last page, or when there are no pages at all.
    pub fn is_last_page(&self) -> bool {
        self.state().is_last_page()
    }

    /// Snapshot of the current position.
    pub fn state(&self) -> PaginationState {
        PaginationState {
            current_page: self.current,
            total_pages: self.total_pages(),
            total_items: self.total_items(),
            page_size: self.page_size,
        }
    }

    /// Iterates over every page in order.
    pub fn pages(&self) -> Chunks<'_, T> {
        self.rows.chunks(self.page_size)
    }

    /// Returns page `index` (1-based), if it exists.
    pub fn page(&self, index: usize) -> Option<&[T]> {
        let start = index.checked_sub(1)?.checked_mul(self.page_size)?;
        if start >= self.rows.len() {
            return None;
        }
        let end = (start + self.page_size).min(self.rows.len());
        Some(&self.rows[start..end])
    }

    /// Rows of the current page; empty when there are no pages.
    pub fn current_page(&self) -> &[T] {
        self.page(self.current).unwrap_or(&[])
    }

    /// Moves to `target` and returns the new page number.
    ///
    /// Numbered targets are clamped into the existing pages. `Previous` on the first page and
    /// `Next` on the last page return `None` without moving, as does any move on an empty set.
    pub fn go_to_page(&mut self, target: PageTarget) -> Option<usize> {
        let total = self.total_pages();
        if total == 0 {
            return None;
        }

        let next = match target {
            PageTarget::Page(index) => {
                let clamped = index.clamp(1, total);
                if clamped != index {
                    warn!("Page {} out of range 1..={}, clamped to {}", index, total, clamped);
                }
                clamped
            }
            PageTarget::Previous => {
                if self.is_first_page() {
                    return None;
                }
                self.current - 1
            }
            PageTarget::Next => {
                if self.is_last_page() {
                    return None;
                }
                self.current + 1
            }
        };

        self.current = next;
        debug!("Moved to page {}/{}", self.current, total);
        Some(next)
    }

    /// Changes the page size, re-derives the pages and returns to the first page.
    ///
    /// A size of 0 is ignored and `false` is returned.
    pub fn change_page_size(&mut self, page_size: usize) -> bool {
        if page_size < 1 {
            warn!("Ignoring page size {}", page_size);
            return false;
        }
        self.page_size = page_size;
        self.current = 1;
        debug!(
            "Page size set to {}: {} pages",
            page_size,
            self.total_pages()
        );
        true
    }

    /// Ordinals of the rows on the current page, or `None` when there are no pages.
    pub fn describe_range(&self) -> Option<PageRange> {
        let page = self.page(self.current)?;
        let first = (self.current - 1) * self.page_size + 1;
        Some(PageRange {
            first,
            last: first + page.len() - 1,
            total: self.total_items(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(count: u32) -> Vec<u32> {
        (1..=count).collect()
    }

    #[test]
    fn test_rejects_zero_page_size() {
        assert!(matches!(
            Paginator::new(numbers(3), 0),
            Err(ConfigError::InvalidPageSize(0))
        ));
    }

    #[test]
    fn test_chunks_with_short_last_page() {
        let paginator = Paginator::new(numbers(7), 3).unwrap();
        let pages: Vec<&[u32]> = paginator.pages().collect();
        assert_eq!(pages, vec![&[1, 2, 3][..], &[4, 5, 6][..], &[7][..]]);
        assert_eq!(paginator.total_pages(), 3);
        assert_eq!(paginator.page(3), Some(&[7][..]));
        assert_eq!(paginator.page(4), None);
        assert_eq!(paginator.page(0), None);
    }

    #[test]
    fn test_empty_row_set() {
        let mut paginator = Paginator::new(Vec::<u32>::new(), 10).unwrap();
        assert_eq!(paginator.total_pages(), 0);
        assert!(paginator.current_page().is_empty());
        assert_eq!(paginator.describe_range(), None);
        assert_eq!(paginator.go_to_page(PageTarget::Next), None);
        assert_eq!(paginator.go_to_page(PageTarget::Page(1)), None);
        assert_eq!(paginator.current_index(), 1);
    }

    #[test]
    fn test_page_size_larger_than_rows() {
        let paginator = Paginator::new(numbers(4), 10).unwrap();
        assert_eq!(paginator.total_pages(), 1);
        assert_eq!(paginator.current_page(), &[1, 2, 3, 4]);
        assert!(paginator.is_first_page());
        assert!(paginator.is_last_page());
    }

    #[test]
    fn test_previous_and_next_bounds() {
        let mut paginator = Paginator::new(numbers(5), 2).unwrap();
        assert_eq!(paginator.go_to_page(PageTarget::Previous), None);
        assert_eq!(paginator.current_index(), 1);

        assert_eq!(paginator.go_to_page(PageTarget::Next), Some(2));
        assert_eq!(paginator.go_to_page(PageTarget::Next), Some(3));
        assert!(paginator.is_last_page());
        assert!(!paginator.is_first_page());
        assert_eq!(paginator.go_to_page(PageTarget::Next), None);
        assert_eq!(paginator.current_page(), &[5]);

        assert_eq!(paginator.go_to_page(PageTarget::Previous), Some(2));
    }

    #[test]
    fn test_numbered_target_is_clamped() {
        let mut paginator = Paginator::new(numbers(5), 2).unwrap();
        assert_eq!(paginator.go_to_page(PageTarget::Page(9)), Some(3));
        assert_eq!(paginator.go_to_page(PageTarget::Page(0)), Some(1));
        assert_eq!(paginator.go_to_page(PageTarget::Page(2)), Some(2));
    }

    #[test]
    fn test_change_page_size_resets_to_first_page() {
        let mut paginator = Paginator::new(numbers(30), 10).unwrap();
        paginator.go_to_page(PageTarget::Page(3));
        assert!(paginator.change_page_size(4));
        assert_eq!(paginator.current_index(), 1);
        assert_eq!(paginator.total_pages(), 8);
        assert_eq!(paginator.current_page(), &[1, 2, 3, 4]);

        assert!(!paginator.change_page_size(0));
        assert_eq!(paginator.page_size(), 4);
    }

    #[test]
    fn test_set_rows_resets_to_first_page() {
        let mut paginator = Paginator::new(numbers(6), 2).unwrap();
        paginator.go_to_page(PageTarget::Page(3));
        paginator.set_rows(vec![6, 5, 4, 3, 2, 1]);
        assert_eq!(paginator.current_index(), 1);
        assert_eq!(paginator.current_page(), &[6, 5]);
    }

    #[test]
    fn test_describe_range() {
        let mut paginator = Paginator::new(numbers(25), 10).unwrap();
        paginator.go_to_page(PageTarget::Page(2));
        let range = paginator.describe_range().unwrap();
        assert_eq!(
            range,
            PageRange {
                first: 11,
                last: 20,
                total: 25
            }
        );
        assert_eq!(range.to_string(), "Showing 11 to 20 of 25 rows");

        paginator.go_to_page(PageTarget::Next);
        let range = paginator.describe_range().unwrap();
        assert_eq!((range.first, range.last), (21, 25));
    }
}
