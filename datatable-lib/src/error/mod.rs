//! Error types

mod config;
mod setup;

pub use config::*;
pub use setup::*;
