//! File logging setup.

use std::fs::File;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::CliError;

/// Routes the `log` macros to `path`, truncating it.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), CliError> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    let file = File::create(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    WriteLogger::init(level, Config::default(), file)
        .map_err(|err| CliError::Logging(err.to_string()))
}
