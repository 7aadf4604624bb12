//! Counter-delta rate computation.

use std::fmt;

use super::history::{Sample, SampleHistory};
use super::metrics::RateValue;

/// Why no rate could be produced for a counter this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateUnavailable {
    /// Only one sample exists for the source so far
    NoBaseline,
    /// Samples are not strictly ordered in time
    NoElapsedTime,
    /// Counter missing from one of the samples
    MissingCounter,
    /// Counter decreased (reset, rollover or replaced device)
    CounterRollback,
}

impl fmt::Display for RateUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RateUnavailable::NoBaseline => "no baseline sample",
            RateUnavailable::NoElapsedTime => "no elapsed time between samples",
            RateUnavailable::MissingCounter => "counter missing from sample",
            RateUnavailable::CounterRollback => "counter rolled back",
        };
        f.write_str(msg)
    }
}

/// Per-second rate of `counter` between two samples.
///
/// Elapsed time comes from the samples' monotonic timestamps.
pub fn compute_rate(
    previous: Option<&Sample>,
    current: &Sample,
    counter: &str,
) -> Result<f64, RateUnavailable> {
    let previous = previous.ok_or(RateUnavailable::NoBaseline)?;

    let elapsed = current
        .timestamp()
        .checked_duration_since(previous.timestamp())
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    if elapsed <= 0.0 {
        return Err(RateUnavailable::NoElapsedTime);
    }

    let prev = previous
        .counter(counter)
        .ok_or(RateUnavailable::MissingCounter)?;
    let curr = current
        .counter(counter)
        .ok_or(RateUnavailable::MissingCounter)?;
    if curr < prev {
        return Err(RateUnavailable::CounterRollback);
    }

    Ok((curr - prev) as f64 / elapsed)
}

/// Record `sample` and compute rates for `counters`.
///
/// A rollback on any counter drops the baseline for the whole source.
pub fn record_and_rate(
    history: &mut SampleHistory,
    sample: Sample,
    counters: &[&str],
) -> Vec<RateValue> {
    let source_id = sample.source_id().to_string();
    let window = history.record(sample);

    let results: Vec<_> = counters
        .iter()
        .map(|name| {
            let gauge = window.current.counter(name).unwrap_or(0);
            (
                gauge,
                compute_rate(window.previous.as_ref(), &window.current, name),
            )
        })
        .collect();

    if results
        .iter()
        .any(|(_, r)| *r == Err(RateUnavailable::CounterRollback))
    {
        log::debug!("{}: counter rollback, resetting baseline", source_id);
        history.reset_baseline(&source_id);
        return results
            .into_iter()
            .map(|(gauge, _)| RateValue {
                gauge,
                rate_per_sec: None,
            })
            .collect();
    }

    results
        .into_iter()
        .map(|(gauge, rate)| RateValue {
            gauge,
            rate_per_sec: rate.ok(),
        })
        .collect()
}
