// Core business logic module

pub mod config;
pub mod system_monitor;

// Re-export commonly used items
pub use config::{Config, NameFilter};
