//! Common imports for hosts driving a [`DataTable`](crate::DataTable).

pub use crate::DataTable;
pub use crate::config::{Position, TableConfig, UnusedNavs};
pub use crate::error::{ConfigError, SetupError};
pub use crate::model::{RowId, StaticTable, TableRow, TableSource};
pub use crate::nav::{LinkState, NavLink, Navigation};
pub use crate::paginator::{PageRange, PageTarget, PaginationState, Paginator};
pub use crate::render::{Heading, PageSizeSelector, Renderer};
pub use crate::sort::{CellValue, SortDirection, SortState, Sorter};
