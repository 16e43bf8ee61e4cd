//! Row and table source types

mod row;
mod source;

pub use row::{RowId, TableRow};
pub use source::{StaticTable, TableSource};
