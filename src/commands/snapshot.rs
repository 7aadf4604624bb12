//! Snapshot command handler.
//!
//! Prints a fixed number of ticks as colored rows or JSON lines.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::plugins::Dashboard;
use crate::ui::plain::print_panels;

/// Execute the snapshot command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = super::load_config(matches)?;
    let interval = Duration::from_millis(super::interval_ms(matches, &config));
    let count = matches.get_one::<u64>("count").copied().unwrap_or(1);
    let width = matches.get_one::<usize>("width").copied().unwrap_or(80);
    let json = matches.get_flag("json");

    let mut dashboard = Dashboard::new(&config).context("Failed to set up dashboard")?;
    dashboard.set_options(super::display_options(matches, &config));

    // Baseline tick: rates need two samples
    dashboard.tick();

    for i in 0..count {
        thread::sleep(interval);
        dashboard.tick();

        if json {
            println!(
                "{}",
                serde_json::to_string(dashboard.snapshot()).context("Failed to serialize stats")?
            );
        } else {
            if i > 0 {
                println!();
            }
            print_panels(&dashboard.panels(width));
        }
    }

    Ok(())
}
