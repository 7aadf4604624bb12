use chrono::{DateTime, Local};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::system_monitor::{Metric, Unit};

const PREFIXES: [&str; 6] = ["K", "M", "G", "T", "P", "E"];

/// Scaling family for auto units.
///
/// Bytes scale by 1024, bits by 1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitFamily {
    Bytes,
    Bits,
}

impl UnitFamily {
    pub fn base(self) -> f64 {
        match self {
            UnitFamily::Bytes => 1024.0,
            UnitFamily::Bits => 1000.0,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            UnitFamily::Bytes => "B",
            UnitFamily::Bits => "b",
        }
    }
}

/// Format a magnitude with the largest prefix keeping it >= 1
/// (`500B`, `1.50KB`, `12.5Mb`, `640GB`)
pub fn auto_unit(value: f64, family: UnitFamily) -> String {
    let suffix = family.suffix();
    if !value.is_finite() || value <= 0.0 {
        return format!("0{}", suffix);
    }

    let base = family.base();
    if value < base {
        return format!("{}{}", value as u64, suffix);
    }

    let mut scaled = value / base;
    let mut index = 0;
    while scaled >= base && index < PREFIXES.len() - 1 {
        scaled /= base;
        index += 1;
    }

    let mut precision = precision_for(scaled);
    // Rounding may carry the value up to the next prefix
    if round_to(scaled, precision) >= base && index < PREFIXES.len() - 1 {
        scaled /= base;
        index += 1;
        precision = precision_for(scaled);
    }
    format!("{:.*}{}{}", precision, scaled, PREFIXES[index], suffix)
}

/// Three significant digits, counted after rounding
fn precision_for(scaled: f64) -> usize {
    let mut precision = 2;
    while precision > 0 && round_to(scaled, precision) >= 10f64.powi(3 - precision as i32) {
        precision -= 1;
    }
    precision
}

fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Text of a metric value according to its unit
pub fn format_metric_value(metric: &Metric) -> String {
    match metric.unit {
        Unit::Byte => auto_unit(metric.value, UnitFamily::Bytes),
        Unit::BitPerSecond => auto_unit(metric.value, UnitFamily::Bits),
        Unit::Count => format!("{}", metric.value.max(0.0) as u64),
        Unit::Celsius => format!("{:.0}C", metric.value),
        Unit::Percent => format!("{:.0}%", metric.value),
        Unit::Bool => {
            if metric.value != 0.0 {
                "yes".to_string()
            } else {
                "no".to_string()
            }
        }
    }
}

/// Pad or cut `label` to exactly `width` columns.
///
/// Long labels keep their end, marked with a leading `_`, since interface and
/// device names differ mostly in their suffix.
pub fn fit_label(label: &str, width: usize) -> String {
    let label_width = UnicodeWidthStr::width(label);
    if label_width <= width {
        return format!("{}{}", label, " ".repeat(width - label_width));
    }
    if width == 0 {
        return String::new();
    }

    let room = width - 1;
    let mut used = 0;
    let mut kept = Vec::new();
    for c in label.chars().rev() {
        let cw = c.width().unwrap_or(0);
        if used + cw > room {
            break;
        }
        used += cw;
        kept.push(c);
    }

    let mut out = String::with_capacity(width);
    out.push('_');
    out.extend(kept.iter().rev());
    out.push_str(&" ".repeat(room - used));
    out
}

/// Format a timestamp as HH:MM:SS
pub fn format_time(time: DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}
