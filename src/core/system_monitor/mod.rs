//! System monitoring core functionality.
//!
//! Sample bookkeeping, rate computation and threshold classification shared by
//! the dashboard plugins.

pub mod alerts;
mod context;
mod history;
mod metrics;
pub mod rate;
mod sampler;

pub use alerts::{classify, Severity, ThresholdSet};
pub use context::{DisplayOptions, TickContext};
pub use history::{Counters, Sample, SampleHistory, SampleWindow};
pub use metrics::{
    rate_fields, real_interface_name, DiskIoStats, FieldDescription, InterfaceStats, Metric,
    NvmeStats, RateValue, Unit,
};
pub use rate::{compute_rate, record_and_rate, RateUnavailable};
pub use sampler::{DiskIoSource, DiskReading, InterfaceReading, NetworkSource, Sampler};
