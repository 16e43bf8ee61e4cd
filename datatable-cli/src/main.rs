mod cli;
mod command;
mod error;
mod logging;
mod render;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use datatable_lib::prelude::*;
use log::{debug, info};

use crate::cli::Cli;
use crate::command::{Command, HELP};
use crate::error::CliError;
use crate::render::TextRenderer;

type Table = DataTable<Vec<String>, TextRenderer>;

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn load_config(cli: &Cli) -> Result<TableConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => TableConfig::from_json(&read(path)?).map_err(|source| CliError::Config {
            path: path.clone(),
            source,
        })?,
        None => TableConfig::default(),
    };
    if let Some(per_page) = cli.per_page {
        config.per_page = per_page;
    }
    if cli.sortable {
        config.sortable = true;
    }
    Ok(config)
}

fn load_table(cli: &Cli) -> Result<Table, CliError> {
    let source: StaticTable<Vec<String>> =
        serde_json::from_str(&read(&cli.table)?).map_err(|source| CliError::Document {
            path: cli.table.clone(),
            source,
        })?;
    let config = load_config(cli)?;
    let table = DataTable::new(source, config, TextRenderer::new())?
        .on_change(|state| debug!("Showing page {}/{}", state.current_page, state.total_pages));
    Ok(table)
}

/// Applies `command` and returns `false` when the session should end.
fn apply(table: &mut Table, command: Command, out: &mut impl Write) -> io::Result<bool> {
    match command {
        Command::Go(target) => {
            if !table.switch_page(target) {
                writeln!(out, "(page unchanged)")?;
                return Ok(true);
            }
        }
        Command::PageSize(size) => {
            if !table.change_page_size(size) {
                writeln!(out, "(page size must be at least 1)")?;
                return Ok(true);
            }
        }
        Command::Sort(column) => match table.sort(column - 1) {
            Some(direction) => info!("Sorted column {} {:?}", column, direction),
            None => {
                writeln!(out, "(column {column} is not sortable)")?;
                return Ok(true);
            }
        },
        Command::Show => {}
        Command::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(true);
        }
        Command::Quit => return Ok(false),
    }
    writeln!(out, "{}", table.renderer().frame())?;
    Ok(true)
}

fn run(cli: &Cli) -> Result<(), CliError> {
    logging::init(&cli.log_file, cli.log_level.into())?;
    let mut table = load_table(cli)?;
    info!("Loaded {} rows from {}", table.state().total_items, cli.table.display());

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "{}", table.renderer().frame())?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                if !apply(&mut table, command, &mut out)? {
                    break;
                }
            }
            Err(err) => writeln!(out, "{err}")?,
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        let source = StaticTable::new(vec![
            vec!["b".to_string()],
            vec!["a".to_string()],
            vec!["c".to_string()],
        ])
        .with_headings(["Letter"]);
        let config = TableConfig::default().with_per_page(2).with_sortable(true);
        DataTable::new(source, config, TextRenderer::new()).unwrap()
    }

    #[test]
    fn test_apply_commands() {
        let mut table = table();
        let mut out = Vec::new();

        assert!(apply(&mut table, Command::Go(PageTarget::Next), &mut out).unwrap());
        assert_eq!(table.state().current_page, 2);

        assert!(apply(&mut table, Command::Sort(1), &mut out).unwrap());
        assert_eq!(table.state().current_page, 1);
        assert_eq!(table.sort_state(0), SortState::Ascending);

        out.clear();
        assert!(apply(&mut table, Command::Sort(4), &mut out).unwrap());
        assert_eq!(String::from_utf8(out.clone()).unwrap(), "(column 4 is not sortable)\n");

        assert!(!apply(&mut table, Command::Quit, &mut out).unwrap());
    }
}
