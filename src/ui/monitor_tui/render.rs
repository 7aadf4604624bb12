use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::MonitorApp;
use super::widgets::row_to_line;
use crate::ui::formatters::format_time;

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &MonitorApp) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Panels
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_panels(frame, chunks[1], app);
    render_footer(frame, chunks[2]);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let options = app.dashboard.options();
    let updated = app
        .last_update
        .map(format_time)
        .unwrap_or_else(|| "--:--:--".to_string());
    let unit = if options.byte { "bytes" } else { "bits" };
    let mode = if options.cumulative { "cumulative" } else { "rate" };

    let text = format!(
        " statline │ {} │ {} │ {} │ every {}ms ",
        updated, unit, mode, app.interval_ms
    );
    let para = Paragraph::new(text).style(Style::default().fg(Color::White).bg(Color::Blue));
    frame.render_widget(para, area);
}

fn render_panels(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let panels = app.dashboard.panels(inner.width as usize);
    if panels.is_empty() {
        let para = Paragraph::new("Waiting for data...").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(para, inner);
        return;
    }

    let mut lines = Vec::new();
    for (i, panel) in panels.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(panel.rows.iter().map(row_to_line));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let help = " q: Quit │ ?: Help │ b: Bits/bytes │ t: Rx+Tx │ u: Cumulative ";
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_text = r#"
    statline - Help

    Keyboard Shortcuts:
    ─────────────────────────────────────
    q / Esc     Quit the application
    ? / h       Toggle this help screen
    b           Network values in bits or bytes
    t           Combined Rx+Tx column
    u           Cumulative counters instead of rates

    Press any key to close this help
    "#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::DarkGray));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    let popup_area = centered_rect(60, 50, area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
