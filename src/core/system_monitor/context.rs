use std::collections::HashSet;

use super::history::SampleHistory;
use crate::core::config::GeneralConfig;

/// How rate plugins present their values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Bytes instead of bits for network values
    pub byte: bool,
    /// Cumulative counters instead of per-second rates
    pub cumulative: bool,
    /// Single Rx+Tx column
    pub sum: bool,
}

impl From<&GeneralConfig> for DisplayOptions {
    fn from(general: &GeneralConfig) -> Self {
        Self {
            byte: general.byte,
            cumulative: general.cumulative,
            sum: general.sum,
        }
    }
}

/// State carried from one tick to the next, owned by the display host.
///
/// Plugins hold only immutable configuration; everything they remember
/// between ticks lives here.
#[derive(Debug, Clone, Default)]
pub struct TickContext {
    pub history: SampleHistory,
    pub options: DisplayOptions,
    nonzero_seen: HashSet<String>,
}

impl TickContext {
    pub fn new(options: DisplayOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Remember that `key` has shown a non-zero value at least once
    pub fn mark_nonzero(&mut self, key: &str) {
        if !self.nonzero_seen.contains(key) {
            self.nonzero_seen.insert(key.to_string());
        }
    }

    pub fn has_been_nonzero(&self, key: &str) -> bool {
        self.nonzero_seen.contains(key)
    }

    /// Forget the sources under `prefix` that are not in `live`
    pub fn retain_sources(&mut self, prefix: &str, live: &HashSet<String>) {
        self.history.retain_sources(prefix, live);
        self.nonzero_seen.retain(|id| !id.starts_with(prefix) || live.contains(id));
    }
}
