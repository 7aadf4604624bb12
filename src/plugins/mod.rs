//! Dashboard plugins.
//!
//! Each plugin samples one kind of source, turns the samples into typed stats
//! and renders them as rows. Plugins keep only their configuration and the
//! handle to their source; per-tick memory lives in [`TickContext`].

mod dashboard;
pub mod diskio;
pub mod network;
pub mod nvme;

pub use dashboard::{Dashboard, DashboardSnapshot, Panel};
pub use diskio::DiskIoPlugin;
pub use network::NetworkPlugin;
pub use nvme::NvmePlugin;

use serde::Serialize;

use crate::core::system_monitor::{FieldDescription, TickContext};
use crate::ui::presenter::Row;

/// A poll-format-display unit driven once per tick by the host
pub trait Plugin {
    type Stats: Serialize;

    fn name(&self) -> &'static str;

    /// Static description of the fields this plugin produces
    fn fields(&self) -> &'static [FieldDescription];

    fn is_disabled(&self) -> bool;

    /// Sample the sources and compute this tick's stats.
    ///
    /// Never fails: an unavailable source yields fewer (or no) stats.
    fn update(&mut self, ctx: &mut TickContext) -> Vec<Self::Stats>;

    /// Render `stats` within `width` columns. Empty when there is nothing to
    /// show, title included.
    fn render(&self, stats: &[Self::Stats], ctx: &TickContext, width: usize) -> Vec<Row>;
}

/// Log a sampling failure: transient ones at debug, the rest as warnings
pub(crate) fn log_source_error(what: &str, error: &crate::error::StatlineError) {
    if error.is_transient() {
        log::debug!("{}: no data this tick ({})", what, error);
    } else {
        log::warn!("{}: {}", what, error);
    }
}
