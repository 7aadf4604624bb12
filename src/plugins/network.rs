//! Network interface plugin.

use std::collections::{HashMap, HashSet};

use super::{log_source_error, Plugin};
use crate::core::config::{NameFilter, NetworkConfig};
use crate::core::system_monitor::{
    classify, rate_fields, real_interface_name, record_and_rate, Counters, FieldDescription,
    InterfaceReading, InterfaceStats, Metric, NetworkSource, RateValue, Sample, Severity,
    TickContext, Unit,
};
use crate::error::Result;
use crate::ui::presenter::{format_row, title_row, Cell, Column, Row};

const SOURCE_PREFIX: &str = "net:";
const COLUMN_WIDTH: usize = 7;
const SUM_COLUMN_WIDTH: usize = 14;
/// " MAC: xx:xx:xx:xx:xx:xx"
const MAC_WIDTH: usize = 23;

pub const FIELDS: &[FieldDescription] = &[
    FieldDescription::new("interface_name", "Interface name."),
    FieldDescription::new("alias", "Interface alias name (optional)."),
    FieldDescription::new("bytes_recv", "Number of bytes received.")
        .unit(Unit::Byte)
        .rate(),
    FieldDescription::new("bytes_sent", "Number of bytes sent.")
        .unit(Unit::Byte)
        .rate(),
    FieldDescription::new("bytes_all", "Number of bytes received and sent.")
        .unit(Unit::Byte)
        .rate(),
    FieldDescription::new(
        "speed",
        "Maximum interface speed (in bit per second). Can return 0 on some operating systems.",
    )
    .unit(Unit::BitPerSecond),
    FieldDescription::new("is_up", "Is the interface up?").unit(Unit::Bool),
];

pub struct NetworkPlugin {
    source: Box<dyn NetworkSource>,
    config: NetworkConfig,
    filter: NameFilter,
}

impl NetworkPlugin {
    pub fn new(source: Box<dyn NetworkSource>, config: NetworkConfig) -> Result<Self> {
        let filter = NameFilter::new(&config.show, &config.hide)?;
        Ok(Self {
            source,
            config,
            filter,
        })
    }

    fn is_selected(&self, reading: &InterfaceReading) -> bool {
        if !self.filter.is_display(&reading.name) {
            return false;
        }
        if self.config.hide_no_up && !reading.is_up {
            return false;
        }
        if self.config.hide_no_ip && !reading.has_ip {
            return false;
        }
        true
    }

    /// Rx/Tx severities of the bitrate.
    ///
    /// Per-interface thresholds first, then the percent-of-link-speed policy.
    fn alert(&self, stats: &InterfaceStats) -> (Severity, Severity) {
        let (Some(rx), Some(tx)) = (stats.bytes_recv.rate_per_sec, stats.bytes_sent.rate_per_sec)
        else {
            return (Severity::Default, Severity::Default);
        };

        let real_name = real_interface_name(&stats.interface_name);
        let maximum = (stats.speed > 0).then_some(stats.speed as f64);

        let rx_severity = classify(
            rx * 8.0,
            self.config.thresholds.get(&format!("{}_rx", real_name)),
            Some(&self.config.rx),
            maximum,
        );
        let tx_severity = classify(
            tx * 8.0,
            self.config.thresholds.get(&format!("{}_tx", real_name)),
            Some(&self.config.tx),
            maximum,
        );
        (rx_severity, tx_severity)
    }

    /// Alias from the stats or the config, else the real interface name
    fn label<'a>(&'a self, stats: &'a InterfaceStats) -> &'a str {
        match (&stats.alias, self.config.alias.get(&stats.interface_name)) {
            (Some(alias), _) | (None, Some(alias)) => alias.as_str(),
            (None, None) => stats.display_name(),
        }
    }

    fn headers(&self, ctx: &TickContext) -> Vec<(&'static str, usize)> {
        match (ctx.options.cumulative, ctx.options.sum) {
            (true, true) => vec![("Rx+Tx", SUM_COLUMN_WIDTH)],
            (true, false) => vec![("Rx", COLUMN_WIDTH), ("Tx", COLUMN_WIDTH)],
            (false, true) => vec![("Rx+Tx/s", SUM_COLUMN_WIDTH)],
            (false, false) => vec![("Rx/s", COLUMN_WIDTH), ("Tx/s", COLUMN_WIDTH)],
        }
    }
}

fn source_id(interface_name: &str) -> String {
    format!("{}{}", SOURCE_PREFIX, interface_name)
}

impl Plugin for NetworkPlugin {
    type Stats = InterfaceStats;

    fn name(&self) -> &'static str {
        "network"
    }

    fn fields(&self) -> &'static [FieldDescription] {
        FIELDS
    }

    fn is_disabled(&self) -> bool {
        self.config.disable
    }

    fn update(&mut self, ctx: &mut TickContext) -> Vec<InterfaceStats> {
        let readings = match self.source.interfaces() {
            Ok(readings) => readings,
            Err(e) => {
                log_source_error("Cannot get network interface stats", &e);
                return Vec::new();
            }
        };

        let counter_names = rate_fields(FIELDS);
        let mut live = HashSet::new();
        let mut stats = Vec::new();

        for reading in readings.into_iter().filter(|r| self.is_selected(r)) {
            let id = source_id(&reading.name);
            live.insert(id.clone());

            let mut counters = Counters::new();
            counters.insert("bytes_recv".to_string(), reading.bytes_recv);
            counters.insert("bytes_sent".to_string(), reading.bytes_sent);
            counters.insert(
                "bytes_all".to_string(),
                reading.bytes_recv.saturating_add(reading.bytes_sent),
            );

            let rates = record_and_rate(&mut ctx.history, Sample::new(&id, counters), &counter_names);
            let rate_of = |name: &str| {
                counter_names
                    .iter()
                    .position(|n| *n == name)
                    .map(|i| rates[i])
                    .unwrap_or_default()
            };

            let bytes_recv = rate_of("bytes_recv");
            let bytes_sent = rate_of("bytes_sent");
            if is_nonzero(&bytes_recv) || is_nonzero(&bytes_sent) {
                ctx.mark_nonzero(&id);
            }

            let mut interface = InterfaceStats {
                alias: self.config.alias.get(&reading.name).cloned(),
                interface_name: reading.name,
                bytes_recv,
                bytes_sent,
                bytes_all: rate_of("bytes_all"),
                speed: reading.speed,
                is_up: reading.is_up,
                has_ip: reading.has_ip,
                mac_address: reading.mac_address,
                ..Default::default()
            };
            let (rx_severity, tx_severity) = self.alert(&interface);
            interface.rx_severity = rx_severity;
            interface.tx_severity = tx_severity;
            stats.push(interface);
        }

        ctx.retain_sources(SOURCE_PREFIX, &live);
        stats.sort_by(|a, b| a.interface_name.cmp(&b.interface_name));
        stats
    }

    fn render(&self, stats: &[InterfaceStats], ctx: &TickContext, width: usize) -> Vec<Row> {
        if stats.is_empty() || self.is_disabled() {
            return Vec::new();
        }

        let options = ctx.options;
        let mac_width = if self.config.show_mac { MAC_WIDTH } else { 0 };
        let row_width = width.saturating_sub(mac_width);

        let mut title = title_row("NETWORK", &self.headers(ctx), row_width);
        if mac_width > 0 {
            title.cells.insert(1, Cell::plain(" ".repeat(mac_width)));
        }
        let mut rows = vec![title];

        let (to_bit, unit) = if options.byte {
            (1.0, Unit::Byte)
        } else {
            (8.0, Unit::BitPerSecond)
        };

        for interface in stats {
            // Down interfaces are never displayed
            if !interface.is_up {
                continue;
            }
            if self.config.hide_zero && !ctx.has_been_nonzero(&source_id(&interface.interface_name))
            {
                continue;
            }

            let value = |v: &RateValue| -> Option<f64> {
                if options.cumulative {
                    Some(v.gauge as f64 * to_bit)
                } else {
                    v.rate_per_sec.map(|r| r * to_bit)
                }
            };
            let metric = |name: &str, v: f64| {
                if options.cumulative {
                    Metric::gauge(name, v, unit)
                } else {
                    Metric::rate(name, v, unit)
                }
            };

            // A new interface has no rate until its second sample
            let (Some(rx), Some(tx), Some(all)) = (
                value(&interface.bytes_recv),
                value(&interface.bytes_sent),
                value(&interface.bytes_all),
            ) else {
                continue;
            };

            let mut severities = HashMap::new();
            let columns = if options.sum {
                vec![Column::new(metric("bytes_all", all), SUM_COLUMN_WIDTH)]
            } else {
                severities.insert("bytes_recv".to_string(), interface.rx_severity);
                severities.insert("bytes_sent".to_string(), interface.tx_severity);
                vec![
                    Column::new(metric("bytes_recv", rx), COLUMN_WIDTH),
                    Column::new(metric("bytes_sent", tx), COLUMN_WIDTH),
                ]
            };

            let mut row = format_row(self.label(interface), &columns, &severities, row_width);
            if mac_width > 0 {
                let mac = interface.mac_address.as_deref().unwrap_or("Unknown");
                row.cells.insert(
                    1,
                    Cell::plain(format!("{:<width$}", format!(" MAC: {}", mac), width = mac_width)),
                );
            }
            rows.push(row);
        }

        rows
    }
}

fn is_nonzero(value: &RateValue) -> bool {
    value.rate_per_sec.is_some_and(|r| r > 0.0)
}
