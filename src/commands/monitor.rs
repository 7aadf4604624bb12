//! Monitor command handler.
//!
//! Runs the dashboard in a full-screen TUI.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::plugins::Dashboard;
use crate::ui::monitor_tui::{run_monitor_app, MonitorAppConfig};

/// Execute the monitor command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = super::load_config(matches)?;
    let interval_ms = super::interval_ms(matches, &config);

    let mut dashboard = Dashboard::new(&config).context("Failed to set up dashboard")?;
    dashboard.set_options(super::display_options(matches, &config));

    log::info!("Starting monitor, refresh every {}ms", interval_ms);
    run_monitor_app(dashboard, MonitorAppConfig { interval_ms })
        .context("Failed to run system monitor")
}
