// statline library - public API

// Re-export error types
pub mod error;
pub use error::{Result, StatlineError};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod plugins;
pub mod ui;

// Re-export commonly used types
pub use core::config::Config;
pub use plugins::{Dashboard, Plugin};

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Initialize logging from `RUST_LOG`, defaulting to warnings.
///
/// With `log_file`, records are appended to that file instead of stderr.
pub fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Warn).parse_default_env();

    if let Some(path) = log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder
        .try_init()
        .context("Failed to initialize logger")?;
    Ok(())
}

/// Where the TUI logs when no file is given
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("statline")
        .join("statline.log")
}
