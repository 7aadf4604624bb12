//! Threshold classification for displayed values.
//!
//! Maps a value to a severity using either explicit breakpoints or, when none
//! are configured, percentage breakpoints against a known maximum.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatlineError};

/// Display severity of a value, lowest first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Default,
    Careful,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Default => "DEFAULT",
            Severity::Careful => "CAREFUL",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }
}

/// Inclusive lower bounds for each severity.
///
/// Any level may be left out; the ones present must not decrease from
/// careful to critical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub careful: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<f64>,
}

impl ThresholdSet {
    pub fn new(careful: f64, warning: f64, critical: f64) -> Result<Self> {
        let set = Self {
            careful: Some(careful),
            warning: Some(warning),
            critical: Some(critical),
        };
        set.validate()?;
        Ok(set)
    }

    pub fn is_empty(&self) -> bool {
        self.careful.is_none() && self.warning.is_none() && self.critical.is_none()
    }

    /// Reject NaN and decreasing breakpoints
    pub fn validate(&self) -> Result<()> {
        let present: Vec<(&str, f64)> = [
            ("careful", self.careful),
            ("warning", self.warning),
            ("critical", self.critical),
        ]
        .into_iter()
        .filter_map(|(name, v)| v.map(|v| (name, v)))
        .collect();

        if let Some((name, _)) = present.iter().find(|(_, v)| !v.is_finite()) {
            return Err(StatlineError::config(format!(
                "{} threshold must be a finite number",
                name
            )));
        }

        for pair in present.windows(2) {
            let (lower_name, lower) = pair[0];
            let (upper_name, upper) = pair[1];
            if upper < lower {
                return Err(StatlineError::config(format!(
                    "{} threshold ({}) is below {} threshold ({})",
                    upper_name, upper, lower_name, lower
                )));
            }
        }
        Ok(())
    }

    /// Severity of `value` against these bounds
    pub fn level(&self, value: f64) -> Severity {
        let reached = |bound: Option<f64>| bound.is_some_and(|b| value >= b);

        if reached(self.critical) {
            Severity::Critical
        } else if reached(self.warning) {
            Severity::Warning
        } else if reached(self.careful) {
            Severity::Careful
        } else {
            Severity::Default
        }
    }
}

/// Classify `value`.
///
/// An explicit set wins. Without one, `relative` percentages are applied to
/// `value / maximum` when a positive maximum is known. Otherwise the value is
/// not decorated.
pub fn classify(
    value: f64,
    explicit: Option<&ThresholdSet>,
    relative: Option<&ThresholdSet>,
    maximum: Option<f64>,
) -> Severity {
    if let Some(set) = explicit.filter(|s| !s.is_empty()) {
        return set.level(value);
    }

    match (relative, maximum) {
        (Some(set), Some(max)) if max > 0.0 => set.level(value * 100.0 / max),
        _ => Severity::Default,
    }
}
