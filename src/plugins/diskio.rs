//! Disk I/O plugin.

use std::collections::{HashMap, HashSet};

use super::{log_source_error, Plugin};
use crate::core::config::{DiskIoConfig, NameFilter};
use crate::core::system_monitor::{
    classify, rate_fields, record_and_rate, Counters, DiskIoSource, DiskIoStats,
    FieldDescription, Metric, RateValue, Sample, Severity, ThresholdSet, TickContext, Unit,
};
use crate::error::Result;
use crate::ui::presenter::{format_row, title_row, Column, Row};

const SOURCE_PREFIX: &str = "disk:";
const COLUMN_WIDTH: usize = 7;

pub const FIELDS: &[FieldDescription] = &[
    FieldDescription::new("disk_name", "Disk name."),
    FieldDescription::new("alias", "Disk alias name (optional)."),
    FieldDescription::new("read_bytes", "Number of bytes read.")
        .unit(Unit::Byte)
        .rate(),
    FieldDescription::new("write_bytes", "Number of bytes written.")
        .unit(Unit::Byte)
        .rate(),
];

pub struct DiskIoPlugin {
    source: Box<dyn DiskIoSource>,
    config: DiskIoConfig,
    filter: NameFilter,
}

impl DiskIoPlugin {
    pub fn new(source: Box<dyn DiskIoSource>, config: DiskIoConfig) -> Result<Self> {
        let filter = NameFilter::new(&config.show, &config.hide)?;
        Ok(Self {
            source,
            config,
            filter,
        })
    }

    /// Per-disk thresholds first, then the global read/write bytes/s levels
    fn alert(&self, stats: &DiskIoStats) -> (Severity, Severity) {
        (
            self.level(&stats.disk_name, "rx", &stats.read_bytes, &self.config.read),
            self.level(&stats.disk_name, "tx", &stats.write_bytes, &self.config.write),
        )
    }

    fn level(&self, disk_name: &str, key: &str, value: &RateValue, fallback: &ThresholdSet) -> Severity {
        let Some(rate) = value.rate_per_sec else {
            return Severity::Default;
        };
        let explicit = self.config.thresholds.get(&format!("{}_{}", disk_name, key));
        classify(rate, Some(explicit.unwrap_or(fallback)), None, None)
    }

    fn label<'a>(&'a self, disk: &'a DiskIoStats) -> &'a str {
        disk.alias
            .as_deref()
            .or_else(|| self.config.alias.get(&disk.disk_name).map(String::as_str))
            .unwrap_or(&disk.disk_name)
    }
}

fn source_id(disk_name: &str) -> String {
    format!("{}{}", SOURCE_PREFIX, disk_name)
}

impl Plugin for DiskIoPlugin {
    type Stats = DiskIoStats;

    fn name(&self) -> &'static str {
        "diskio"
    }

    fn fields(&self) -> &'static [FieldDescription] {
        FIELDS
    }

    fn is_disabled(&self) -> bool {
        self.config.disable
    }

    fn update(&mut self, ctx: &mut TickContext) -> Vec<DiskIoStats> {
        let readings = match self.source.disks() {
            Ok(readings) => readings,
            Err(e) => {
                log_source_error("Cannot get disk I/O stats", &e);
                return Vec::new();
            }
        };

        let counter_names = rate_fields(FIELDS);
        let mut live = HashSet::new();
        let mut stats = Vec::new();

        for reading in readings {
            if !self.filter.is_display(&reading.name) {
                continue;
            }
            let id = source_id(&reading.name);
            live.insert(id.clone());

            let mut counters = Counters::new();
            counters.insert("read_bytes".to_string(), reading.read_bytes);
            counters.insert("write_bytes".to_string(), reading.write_bytes);

            let rates = record_and_rate(&mut ctx.history, Sample::new(&id, counters), &counter_names);
            let (read_bytes, write_bytes) = (rates[0], rates[1]);
            if [read_bytes, write_bytes]
                .iter()
                .any(|v| v.rate_per_sec.is_some_and(|r| r > 0.0))
            {
                ctx.mark_nonzero(&id);
            }

            let mut disk = DiskIoStats {
                alias: self.config.alias.get(&reading.name).cloned(),
                disk_name: reading.name,
                read_bytes,
                write_bytes,
                ..Default::default()
            };
            (disk.read_severity, disk.write_severity) = self.alert(&disk);
            stats.push(disk);
        }

        ctx.retain_sources(SOURCE_PREFIX, &live);
        stats.sort_by(|a, b| a.disk_name.cmp(&b.disk_name));
        stats
    }

    fn render(&self, stats: &[DiskIoStats], ctx: &TickContext, width: usize) -> Vec<Row> {
        if stats.is_empty() || self.is_disabled() {
            return Vec::new();
        }

        let cumulative = ctx.options.cumulative;
        let headers = if cumulative {
            [("R", COLUMN_WIDTH), ("W", COLUMN_WIDTH)]
        } else {
            [("R/s", COLUMN_WIDTH), ("W/s", COLUMN_WIDTH)]
        };
        let mut rows = vec![title_row("DISK I/O", &headers, width)];

        for disk in stats {
            if self.config.hide_zero && !ctx.has_been_nonzero(&source_id(&disk.disk_name)) {
                continue;
            }

            let columns = if cumulative {
                vec![
                    Column::new(
                        Metric::gauge("read_bytes", disk.read_bytes.gauge as f64, Unit::Byte),
                        COLUMN_WIDTH,
                    ),
                    Column::new(
                        Metric::gauge("write_bytes", disk.write_bytes.gauge as f64, Unit::Byte),
                        COLUMN_WIDTH,
                    ),
                ]
            } else {
                let (Some(read), Some(write)) =
                    (disk.read_bytes.rate_per_sec, disk.write_bytes.rate_per_sec)
                else {
                    continue;
                };
                vec![
                    Column::new(Metric::rate("read_bytes", read, Unit::Byte), COLUMN_WIDTH),
                    Column::new(Metric::rate("write_bytes", write, Unit::Byte), COLUMN_WIDTH),
                ]
            };

            let severities = HashMap::from([
                ("read_bytes".to_string(), disk.read_severity),
                ("write_bytes".to_string(), disk.write_severity),
            ]);
            rows.push(format_row(self.label(disk), &columns, &severities, width));
        }

        rows
    }
}
