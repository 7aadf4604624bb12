use serde::{Deserialize, Serialize};

use super::alerts::Severity;

/// Unit of a displayed field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Byte,
    BitPerSecond,
    Count,
    Celsius,
    Percent,
    Bool,
}

/// Static description of a plugin field
#[derive(Debug, Clone, Copy)]
pub struct FieldDescription {
    pub name: &'static str,
    pub description: &'static str,
    pub unit: Option<Unit>,
    /// Whether `<name>_rate_per_sec` and `<name>_gauge` are derived each tick
    pub rate: bool,
}

impl FieldDescription {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            unit: None,
            rate: false,
        }
    }

    pub const fn unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub const fn rate(mut self) -> Self {
        self.rate = true;
        self
    }
}

/// Names of the fields with `rate` set
pub fn rate_fields(fields: &[FieldDescription]) -> Vec<&'static str> {
    fields.iter().filter(|f| f.rate).map(|f| f.name).collect()
}

/// One numeric value ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub value: f64,
    pub unit: Unit,
    pub rate: bool,
}

impl Metric {
    pub fn gauge<S: Into<String>>(name: S, value: f64, unit: Unit) -> Self {
        Self {
            name: name.into(),
            value,
            unit,
            rate: false,
        }
    }

    pub fn rate<S: Into<String>>(name: S, value: f64, unit: Unit) -> Self {
        Self {
            name: name.into(),
            value,
            unit,
            rate: true,
        }
    }
}

/// Rate and gauge of a rate field
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RateValue {
    pub gauge: u64,
    pub rate_per_sec: Option<f64>,
}

/// Network interface stats for one tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterfaceStats {
    pub interface_name: String,
    pub alias: Option<String>,
    pub bytes_recv: RateValue,
    pub bytes_sent: RateValue,
    pub bytes_all: RateValue,
    /// Link speed in bit/s, 0 when unknown
    pub speed: u64,
    pub is_up: bool,
    pub has_ip: bool,
    pub mac_address: Option<String>,
    pub rx_severity: Severity,
    pub tx_severity: Severity,
}

/// Disk I/O stats for one tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiskIoStats {
    pub disk_name: String,
    pub alias: Option<String>,
    pub read_bytes: RateValue,
    pub write_bytes: RateValue,
    pub read_severity: Severity,
    pub write_severity: Severity,
}

/// NVMe health stats for one tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NvmeStats {
    pub device: String,
    pub label: String,
    pub temperature_celsius: u64,
    pub percentage_used: Option<u64>,
    pub power_cycles: Option<u64>,
    pub available_spare: Option<u64>,
    pub temperature_severity: Severity,
}

impl InterfaceStats {
    /// Display name: alias, else the name up to the first ':'
    pub fn display_name(&self) -> &str {
        match &self.alias {
            Some(alias) => alias,
            None => real_interface_name(&self.interface_name),
        }
    }
}

/// Strip a virtual-interface suffix (`eth0:1` -> `eth0`)
pub fn real_interface_name(name: &str) -> &str {
    name.split(':').next().unwrap_or(name)
}
