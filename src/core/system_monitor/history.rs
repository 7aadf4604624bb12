use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Instant;

/// Counter values captured from one source, keyed by counter name.
pub type Counters = BTreeMap<String, u64>;

/// Point-in-time snapshot of one metric source
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    source_id: String,
    counters: Counters,
    timestamp: Instant,
}

impl Sample {
    /// Capture a sample stamped with the current monotonic time
    pub fn new<S: Into<String>>(source_id: S, counters: Counters) -> Self {
        Self::at(source_id, counters, Instant::now())
    }

    /// Build a sample with an explicit timestamp
    pub fn at<S: Into<String>>(source_id: S, counters: Counters, timestamp: Instant) -> Self {
        Self {
            source_id: source_id.into(),
            counters,
            timestamp,
        }
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn counter(&self, name: &str) -> Option<u64> {
        self.counters.get(name).copied()
    }

    pub fn timestamp(&self) -> Instant {
        self.timestamp
    }
}

/// The two most recent samples of a source
#[derive(Debug, Clone)]
pub struct SampleWindow {
    pub previous: Option<Sample>,
    pub current: Sample,
}

/// Per-source two-sample window used for rate computation.
///
/// Older samples are discarded as soon as a newer one arrives, so memory stays
/// bounded by the number of live sources.
#[derive(Debug, Clone, Default)]
pub struct SampleHistory {
    windows: HashMap<String, SampleWindow>,
}

impl SampleHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new sample; the previous `current` becomes `previous`
    pub fn record(&mut self, sample: Sample) -> &SampleWindow {
        let key = sample.source_id().to_string();
        let window = match self.windows.remove(&key) {
            Some(old) => SampleWindow {
                previous: Some(old.current),
                current: sample,
            },
            None => SampleWindow {
                previous: None,
                current: sample,
            },
        };
        self.windows.entry(key).or_insert(window)
    }

    pub fn window(&self, source_id: &str) -> Option<&SampleWindow> {
        self.windows.get(source_id)
    }

    /// Drop the previous sample so the current one becomes the new baseline
    pub fn reset_baseline(&mut self, source_id: &str) {
        if let Some(window) = self.windows.get_mut(source_id) {
            window.previous = None;
        }
    }

    /// Forget every source whose id starts with `prefix` and is not in `live`
    pub fn retain_sources(&mut self, prefix: &str, live: &HashSet<String>) {
        self.windows
            .retain(|id, _| !id.starts_with(prefix) || live.contains(id));
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
