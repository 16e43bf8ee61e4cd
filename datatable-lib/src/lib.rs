//! Table pagination and sorting library
//!
//! Splits the body rows of a table into pages, keeps track of the current page and sorts rows by
//! the content of a column. Drawing is left to the host through the [`Renderer`] trait.

pub mod config;
pub mod error;
pub mod model;
pub mod nav;
pub mod paginator;
pub mod prelude;
pub mod render;
pub mod sort;

mod table;

pub use render::Renderer;
pub use table::DataTable;
