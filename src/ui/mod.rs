// UI and formatting module

pub mod formatters;
pub mod monitor_tui;
pub mod plain;
pub mod presenter;

// Re-exports for cleaner imports
pub use formatters::{auto_unit, fit_label, format_time, UnitFamily};
pub use presenter::{format_row, title_row, Cell, Column, Decoration, Row};
