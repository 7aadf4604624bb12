use ratatui::prelude::*;

use crate::ui::presenter::{Decoration, Row};

/// Style for a decoration class
pub fn decoration_style(decoration: Decoration) -> Style {
    match decoration {
        Decoration::Title => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        Decoration::Default => Style::default().fg(Color::Gray),
        Decoration::Careful => Style::default().fg(Color::Cyan),
        Decoration::Warning => Style::default().fg(Color::LightYellow),
        Decoration::Critical => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// One styled span per cell
pub fn row_to_line(row: &Row) -> Line<'static> {
    Line::from(
        row.cells
            .iter()
            .map(|cell| Span::styled(cell.text.clone(), decoration_style(cell.decoration)))
            .collect::<Vec<_>>(),
    )
}
