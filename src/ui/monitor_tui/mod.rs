//! Terminal User Interface for the dashboard.
//!
//! Provides a live view of the plugin panels using ratatui.

mod app;
mod event_handler;
mod render;
mod widgets;

pub use app::{run_monitor_app, MonitorApp, MonitorAppConfig};
pub use event_handler::MonitorEvent;
pub use widgets::{decoration_style, row_to_line};
