//! Plain-text renderer.

use datatable_lib::config::Position;
use datatable_lib::nav::{LinkState, Navigation};
use datatable_lib::paginator::PageRange;
use datatable_lib::render::{Heading, PageSizeSelector, Renderer};
use datatable_lib::sort::SortState;

/// Keeps the latest output of each part and lays them out as a text frame.
#[derive(Debug, Default)]
pub struct TextRenderer {
    headings: Vec<Heading>,
    rows: Vec<Vec<String>>,
    info: Option<String>,
    top_nav: String,
    bottom_nav: String,
    top_selector: String,
    bottom_selector: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The whole table as it should appear on screen.
    pub fn frame(&self) -> String {
        let widths = self.column_widths();
        let mut lines = Vec::new();

        for line in [&self.top_selector, &self.top_nav] {
            if !line.is_empty() {
                lines.push(line.clone());
            }
        }

        if !self.headings.is_empty() {
            let cells: Vec<String> = self
                .headings
                .iter()
                .map(|heading| format!("{}{}", heading.label, sort_marker(heading.sort)))
                .collect();
            lines.push(format_row(&cells, &widths));
            lines.push(
                widths
                    .iter()
                    .map(|&width| "-".repeat(width))
                    .collect::<Vec<_>>()
                    .join("-+-"),
            );
        }

        if self.rows.is_empty() {
            lines.push("(no rows)".to_string());
        }
        for row in &self.rows {
            lines.push(format_row(row, &widths));
        }

        for line in [
            self.info.as_deref().unwrap_or_default(),
            self.bottom_nav.as_str(),
            self.bottom_selector.as_str(),
        ] {
            if !line.is_empty() {
                lines.push(line.to_string());
            }
        }

        lines.join("\n")
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headings
            .iter()
            .map(|heading| {
                heading.label.chars().count() + sort_marker(heading.sort).chars().count()
            })
            .collect();
        for row in &self.rows {
            for (column, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(column) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }
}

fn sort_marker(state: SortState) -> &'static str {
    match state {
        SortState::Unsorted => "",
        SortState::Ascending => " ▲",
        SortState::Descending => " ▼",
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(column, &width)| {
            let cell = cells.get(column).map_or("", String::as_str);
            format!("{cell:<width$}")
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

fn format_navigation(navigation: &Navigation) -> String {
    navigation
        .links()
        .iter()
        .filter_map(|link| match link.state {
            LinkState::Normal => Some(link.label.clone()),
            LinkState::Active => Some(format!("[{}]", link.label)),
            LinkState::Disabled => Some(format!("({})", link.label)),
            LinkState::Hidden => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_selector(selector: &PageSizeSelector) -> String {
    let options: Vec<String> = selector
        .options
        .iter()
        .map(|&size| {
            if selector.selected == Some(size) {
                format!("[{size}]")
            } else {
                size.to_string()
            }
        })
        .collect();
    format!("rows per page: {}", options.join(" "))
}

impl Renderer<Vec<String>> for TextRenderer {
    fn render_rows(&mut self, rows: &[&Vec<String>]) {
        self.rows = rows.iter().map(|&row| row.clone()).collect();
    }

    fn render_navigation(&mut self, position: Position, navigation: &Navigation) {
        let text = format_navigation(navigation);
        match position {
            Position::Top => self.top_nav = text,
            Position::Bottom => self.bottom_nav = text,
            Position::Both => {
                self.top_nav = text.clone();
                self.bottom_nav = text;
            }
        }
    }

    fn render_info(&mut self, range: Option<&PageRange>) {
        self.info = range.map(ToString::to_string);
    }

    fn render_headings(&mut self, headings: &[Heading]) {
        self.headings = headings.to_vec();
    }

    fn render_selector(&mut self, position: Position, selector: &PageSizeSelector) {
        let text = format_selector(selector);
        match position {
            Position::Top => self.top_selector = text,
            Position::Bottom => self.bottom_selector = text,
            Position::Both => {
                self.top_selector = text.clone();
                self.bottom_selector = text;
            }
        }
    }
}
