//! Fixed-width row layout shared by all plugins.
//!
//! Front-ends (TUI, plain terminal) only map [`Decoration`] to colors.

use std::collections::HashMap;

use serde::Serialize;

use super::formatters::{fit_label, format_metric_value};
use crate::core::system_monitor::{Metric, Severity};

/// Style class of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decoration {
    Title,
    Default,
    Careful,
    Warning,
    Critical,
}

impl From<Severity> for Decoration {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Default => Decoration::Default,
            Severity::Careful => Decoration::Careful,
            Severity::Warning => Decoration::Warning,
            Severity::Critical => Decoration::Critical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub text: String,
    pub decoration: Decoration,
}

impl Cell {
    pub fn new<S: Into<String>>(text: S, decoration: Decoration) -> Self {
        Self {
            text: text.into(),
            decoration,
        }
    }

    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self::new(text, Decoration::Default)
    }
}

/// One display line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }

    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Decoration of the first cell carrying `text`, if any
    pub fn decoration_of(&self, text: &str) -> Option<Decoration> {
        self.cells
            .iter()
            .find(|c| c.text.trim() == text)
            .map(|c| c.decoration)
    }
}

/// A value column: the metric and its right-aligned width
#[derive(Debug, Clone)]
pub struct Column {
    pub metric: Metric,
    pub width: usize,
}

impl Column {
    pub fn new(metric: Metric, width: usize) -> Self {
        Self { metric, width }
    }
}

fn columns_width(widths: impl Iterator<Item = usize>) -> usize {
    widths.sum()
}

/// Lay out `label` followed by right-aligned `columns` within `width_budget`.
///
/// Columns always keep their full width; the label absorbs any shortfall.
/// Each column is decorated with the severity found under its metric name.
pub fn format_row(
    label: &str,
    columns: &[Column],
    severities: &HashMap<String, Severity>,
    width_budget: usize,
) -> Row {
    let label_width = width_budget.saturating_sub(columns_width(columns.iter().map(|c| c.width)));

    let mut row = Row::default();
    row.push(Cell::plain(fit_label(label, label_width)));
    for column in columns {
        let text = format_metric_value(&column.metric);
        let severity = severities
            .get(&column.metric.name)
            .copied()
            .unwrap_or_default();
        row.push(Cell::new(
            format!("{:>width$}", text, width = column.width),
            severity.into(),
        ));
    }
    row
}

/// Header line: title on the left, column headers right-aligned
pub fn title_row(title: &str, headers: &[(&str, usize)], width_budget: usize) -> Row {
    let label_width = width_budget.saturating_sub(columns_width(headers.iter().map(|(_, w)| *w)));

    let mut row = Row::default();
    row.push(Cell::new(fit_label(title, label_width), Decoration::Title));
    for (header, width) in headers {
        row.push(Cell::plain(format!("{:>width$}", header, width = width)));
    }
    row
}
