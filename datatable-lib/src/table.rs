//! The table widget.

use log::{debug, warn};

use crate::config::{Position, TableConfig};
use crate::error::SetupError;
use crate::model::{RowId, TableRow, TableSource};
use crate::nav::Navigation;
use crate::paginator::{PageTarget, PaginationState, Paginator};
use crate::render::{Heading, PageSizeSelector, Renderer};
use crate::sort::{SortDirection, SortState, Sorter};

type ChangeCallback = Box<dyn FnMut(&PaginationState)>;

/// A paginated, optionally sortable table.
///
/// `DataTable` owns the records captured from its source and a [`Renderer`] that displays them.
/// Host input is routed to three entry points:
/// - [`switch_page`](Self::switch_page) for pagination links
/// - [`change_page_size`](Self::change_page_size) for the rows-per-page selector
/// - [`sort`](Self::sort) for heading clicks
///
/// # Example
///
/// ```
/// use datatable_lib::prelude::*;
///
/// #[derive(Default)]
/// struct Capture(Vec<String>);
///
/// impl Renderer<Vec<String>> for Capture {
///     fn render_rows(&mut self, rows: &[&Vec<String>]) {
///         self.0 = rows.iter().map(|row| row[0].clone()).collect();
///     }
///     fn render_navigation(&mut self, _: Position, _: &Navigation) {}
///     fn render_info(&mut self, _: Option<&PageRange>) {}
/// }
///
/// let source = StaticTable::new(vec![
///     vec!["b".to_string()],
///     vec!["a".to_string()],
///     vec!["c".to_string()],
/// ])
/// .with_headings(["Letter"]);
/// let config = TableConfig::default().with_per_page(2).with_sortable(true);
///
/// let mut table = DataTable::new(source, config, Capture::default()).unwrap();
/// assert_eq!(table.renderer().0, ["b", "a"]);
///
/// table.sort(0);
/// assert_eq!(table.renderer().0, ["a", "b"]);
/// ```
pub struct DataTable<R, V> {
    records: Vec<R>,
    headings: Option<Vec<String>>,
    config: TableConfig,
    paginator: Paginator<RowId>,
    sorter: Option<Sorter>,
    navigation: Navigation,
    renderer: V,
    on_change: Option<ChangeCallback>,
}

impl<R, V> std::fmt::Debug for DataTable<R, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("records", &self.records.len())
            .field("headings", &self.headings)
            .field("state", &self.paginator.state())
            .field("sorter", &self.sorter)
            .finish_non_exhaustive()
    }
}

impl<R: TableRow, V: Renderer<R>> DataTable<R, V> {
    /// Sets up a table from `source` and draws it for the first time.
    ///
    /// Fails when the source is not a table, when sorting is requested for a table without
    /// headings, or when the configuration is invalid.
    pub fn new<S>(source: S, config: TableConfig, renderer: V) -> Result<Self, SetupError>
    where
        S: TableSource<Row = R>,
    {
        let tag = source.tag_name().to_lowercase();
        if tag != "table" {
            warn!("The selected element ({}) is not a table", tag);
            return Err(SetupError::NotATable(tag));
        }

        let headings = source.headings().map(<[String]>::to_vec);
        let heading_count = headings.as_ref().map_or(0, Vec::len);
        if config.sortable && heading_count == 0 {
            warn!("The sortable option requires table headings");
            return Err(SetupError::MissingHeadings);
        }

        if let Err(err) = config.validate() {
            warn!("Rejected table configuration: {}", err);
            return Err(err.into());
        }

        let records = source.into_rows();
        let order = (0..records.len()).map(RowId::new).collect();
        let paginator = Paginator::new(order, config.per_page)?;
        let sorter = config.sortable.then(|| Sorter::new(heading_count));

        debug!(
            "Table set up: {} rows, {} pages, sortable: {}",
            records.len(),
            paginator.total_pages(),
            config.sortable
        );

        let mut table = Self {
            records,
            headings,
            config,
            paginator,
            sorter,
            navigation: Navigation::default(),
            renderer,
            on_change: None,
        };
        table.redraw();
        Ok(table)
    }

    /// Registers a callback run after every page switch.
    pub fn on_change(mut self, callback: impl FnMut(&PaginationState) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    // -------------------------------------------------------------------------
    // Host input
    // -------------------------------------------------------------------------

    /// Handles a click on a pagination link.
    ///
    /// Clicking the link of the page already shown, or previous/next past either end, does
    /// nothing. Returns `true` if the page was redrawn.
    pub fn switch_page(&mut self, target: PageTarget) -> bool {
        if let PageTarget::Page(index) = target
            && index == self.paginator.current_index()
            && self.navigation.is_active(target)
        {
            return false;
        }

        if matches!(target, PageTarget::Previous | PageTarget::Next) && !self.config.next_prev {
            debug!("Ignoring {:?}: previous/next links are off", target);
            return false;
        }

        if self.paginator.go_to_page(target).is_none() {
            return false;
        }

        self.show_page();
        self.show_info();
        self.show_navigation();

        let state = self.paginator.state();
        if let Some(callback) = self.on_change.as_mut() {
            callback(&state);
        }
        true
    }

    /// Handles a change of the rows-per-page selector.
    ///
    /// The table returns to its first page. A size of 0 is ignored and `false` is returned.
    pub fn change_page_size(&mut self, page_size: usize) -> bool {
        if !self.paginator.change_page_size(page_size) {
            return false;
        }
        self.config.per_page = page_size;
        self.redraw();
        true
    }

    /// Handles a click on the heading of `column` and returns the new sort direction.
    ///
    /// Returns `None` without touching the table when sorting is off or the column is unknown.
    pub fn sort(&mut self, column: usize) -> Option<SortDirection> {
        let Some(sorter) = self.sorter.as_mut() else {
            debug!("Ignoring sort on column {}: sorting is off", column);
            return None;
        };

        let records = &self.records;
        let mut order = self.paginator.rows().to_vec();
        let direction = sorter.sort(column, &mut order, |id| {
            records
                .get(id.index())
                .and_then(|record| record.cell_text(column))
                .map(|text| text.into_owned())
                .unwrap_or_default()
        })?;

        self.paginator.set_rows(order);
        self.redraw();
        Some(direction)
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    /// Snapshot of the pagination position.
    pub fn state(&self) -> PaginationState {
        self.paginator.state()
    }

    /// The configuration in effect. `per_page` follows selector changes.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Records of the current page, in display order.
    pub fn current_rows(&self) -> Vec<&R> {
        self.resolve(self.paginator.current_page())
    }

    /// All records in their current order.
    pub fn rows(&self) -> Vec<&R> {
        self.resolve(self.paginator.rows())
    }

    /// Row handles in their current order.
    pub fn row_order(&self) -> &[RowId] {
        self.paginator.rows()
    }

    /// The record behind `id`.
    pub fn record(&self, id: RowId) -> Option<&R> {
        self.records.get(id.index())
    }

    /// Sort state of `column`; always unsorted when sorting is off.
    pub fn sort_state(&self, column: usize) -> SortState {
        self.sorter
            .as_ref()
            .map(|sorter| sorter.state(column))
            .unwrap_or_default()
    }

    /// Heading cells with their sort states, or an empty list for a headerless table.
    pub fn headings(&self) -> Vec<Heading> {
        self.headings
            .iter()
            .flatten()
            .enumerate()
            .map(|(column, label)| Heading {
                label: label.clone(),
                sort: self.sort_state(column),
            })
            .collect()
    }

    /// The pagination links as last rendered.
    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    /// The renderer.
    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    /// The renderer, mutably.
    pub fn renderer_mut(&mut self) -> &mut V {
        &mut self.renderer
    }

    /// Tears the table down and returns its records in their original order, with the renderer.
    pub fn into_parts(self) -> (Vec<R>, V) {
        (self.records, self.renderer)
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    fn resolve(&self, ids: &[RowId]) -> Vec<&R> {
        ids.iter().filter_map(|&id| self.record(id)).collect()
    }

    /// Full redraw after setup, a sort or a page-size change.
    fn redraw(&mut self) {
        if self.config.fixed_height {
            self.renderer.release_height();
        }

        if self.headings.is_some() {
            let headings = self.headings();
            self.renderer.render_headings(&headings);
        }

        let selector =
            PageSizeSelector::new(&self.config.per_page_select, self.paginator.page_size());
        for position in sides(self.config.selector_position) {
            self.renderer.render_selector(position, &selector);
        }

        self.show_page();
        self.show_info();
        self.show_navigation();

        if self.config.fixed_height {
            self.renderer.lock_height();
        }
    }

    fn show_page(&mut self) {
        let rows: Vec<&R> = self
            .paginator
            .current_page()
            .iter()
            .filter_map(|id| self.records.get(id.index()))
            .collect();
        self.renderer.render_rows(&rows);
    }

    fn show_info(&mut self) {
        if !self.config.info {
            return;
        }
        let range = self.paginator.describe_range().filter(|_| {
            self.config.info_on_single_page || self.paginator.total_pages() > 1
        });
        self.renderer.render_info(range.as_ref());
    }

    fn show_navigation(&mut self) {
        self.navigation = Navigation::build(&self.paginator.state(), &self.config);
        for position in sides(self.config.nav_position) {
            self.renderer.render_navigation(position, &self.navigation);
        }
    }
}

/// The concrete sides a control at `position` is drawn on.
fn sides(position: Position) -> impl Iterator<Item = Position> {
    [
        position.includes_top().then_some(Position::Top),
        position.includes_bottom().then_some(Position::Bottom),
    ]
    .into_iter()
    .flatten()
}
