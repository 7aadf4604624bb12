// Command handlers module
pub mod config;
pub mod monitor;
pub mod snapshot;
pub mod version;

use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;

use crate::core::config::Config;
use crate::core::system_monitor::DisplayOptions;

/// Load the configuration named by the global `--config` flag
pub(crate) fn load_config(matches: &ArgMatches) -> Result<Config> {
    let path = matches.get_one::<PathBuf>("config");
    Config::load(path.map(PathBuf::as_path))
}

/// Interval from `--interval`, else the configured refresh
pub(crate) fn interval_ms(matches: &ArgMatches, config: &Config) -> u64 {
    matches
        .get_one::<u64>("interval")
        .copied()
        .unwrap_or(config.general.refresh_ms)
}

/// Display options from the config, switched on by CLI flags
pub(crate) fn display_options(matches: &ArgMatches, config: &Config) -> DisplayOptions {
    let mut options = DisplayOptions::from(&config.general);
    options.byte |= matches.get_flag("byte");
    options.sum |= matches.get_flag("sum");
    options.cumulative |= matches.get_flag("cumulative");
    options
}
