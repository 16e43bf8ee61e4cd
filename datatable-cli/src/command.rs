//! Line commands read from the terminal.

use std::str::FromStr;

use datatable_lib::paginator::PageTarget;

/// A single user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Follow a pagination link.
    Go(PageTarget),
    /// Pick a rows-per-page value.
    PageSize(usize),
    /// Click a column heading (1-based, as shown on screen).
    Sort(usize),
    /// Redraw the current page.
    Show,
    /// List the commands.
    Help,
    /// Leave.
    Quit,
}

/// Rejected command input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),
    #[error("`{0}` needs a number")]
    MissingArgument(&'static str),
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("columns are numbered from 1")]
    ZeroColumn,
}

pub const HELP: &str = "\
commands:
  n, next        next page
  p, prev        previous page
  page N, N      go to page N
  size N         show N rows per page
  sort C         sort by column C (again to reverse)
  show           redraw
  q, quit        quit";

fn number(name: &'static str, arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument(name))?;
    arg.parse()
        .map_err(|_| CommandError::NotANumber(arg.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Self::Show);
        };
        let arg = words.next();

        match head.to_lowercase().as_str() {
            "n" | "next" => Ok(Self::Go(PageTarget::Next)),
            "p" | "prev" | "previous" => Ok(Self::Go(PageTarget::Previous)),
            "page" | "g" => Ok(Self::Go(PageTarget::Page(number("page", arg)?))),
            "size" => Ok(Self::PageSize(number("size", arg)?)),
            "sort" | "s" => match number("sort", arg)? {
                0 => Err(CommandError::ZeroColumn),
                column => Ok(Self::Sort(column)),
            },
            "show" => Ok(Self::Show),
            "h" | "help" | "?" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => other
                .parse()
                .map(|page| Self::Go(PageTarget::Page(page)))
                .map_err(|_| CommandError::Unknown(head.to_string())),
        }
    }
}
