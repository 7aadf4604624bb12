// Colored line output for non-interactive use

use colored::{ColoredString, Colorize};

use super::presenter::{Cell, Decoration, Row};
use crate::plugins::Panel;

/// Color a cell according to its decoration
pub fn paint(cell: &Cell) -> ColoredString {
    let text = cell.text.as_str();
    match cell.decoration {
        Decoration::Title => text.white().bold(),
        Decoration::Default => text.normal(),
        Decoration::Careful => text.cyan(),
        Decoration::Warning => text.yellow(),
        Decoration::Critical => text.red().bold(),
    }
}

pub fn paint_row(row: &Row) -> String {
    row.cells.iter().map(|c| paint(c).to_string()).collect()
}

/// Print panels separated by a blank line
pub fn print_panels(panels: &[Panel]) {
    for (i, panel) in panels.iter().enumerate() {
        if i > 0 {
            println!();
        }
        for row in &panel.rows {
            println!("{}", paint_row(row));
        }
    }
}
