use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;
use std::path::PathBuf;

use crate::core::config::Config;
use crate::plugins::Dashboard;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    if matches.get_flag("default") {
        println!("# statline configuration");
        println!("# Thresholds are inclusive lower bounds: careful <= warning <= critical.");
        println!("# network.rx/tx are percent of link speed; per-interface thresholds");
        println!("# (network.thresholds.<interface>_rx) are in bit/s, disk ones in bytes/s.");
        println!();
        print!("{}", Config::default_toml()?);
        return Ok(());
    }

    if matches.get_flag("fields") {
        return print_fields(&super::load_config(matches)?);
    }

    let path = match matches.get_one::<PathBuf>("config") {
        Some(p) => p.clone(),
        None => Config::get_config_path()?,
    };
    let state = if path.exists() {
        "exists".green()
    } else {
        "not found, using defaults".yellow()
    };
    println!("{} ({})", path.display(), state);

    // Fails on invalid files
    super::load_config(matches)?;
    Ok(())
}

/// List the fields each plugin reports
fn print_fields(config: &Config) -> Result<()> {
    let dashboard = Dashboard::new(config)?;
    for (plugin, fields) in dashboard.fields() {
        println!("{}", plugin.bold());
        for field in fields {
            let unit = field
                .unit
                .and_then(|u| serde_json::to_value(u).ok())
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            let rate = if field.rate { " (rate)" } else { "" };
            println!(
                "  {:<16} {:<14} {}{}",
                field.name,
                unit,
                field.description,
                rate.dimmed()
            );
        }
    }
    Ok(())
}
