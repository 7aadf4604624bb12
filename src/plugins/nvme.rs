//! NVMe temperature and health plugin.

use std::collections::HashMap;
use std::path::Path;

use super::{log_source_error, Plugin};
use crate::core::config::NvmeConfig;
use crate::core::system_monitor::{
    classify, Counters, FieldDescription, Metric, NvmeStats, Sampler, TickContext, Unit,
};
use crate::platform::smartctl::{AVAILABLE_SPARE, PERCENTAGE_USED, POWER_CYCLES, TEMPERATURE};
use crate::ui::presenter::{format_row, title_row, Column, Row};

const COLUMN_WIDTH: usize = 7;

pub const FIELDS: &[FieldDescription] = &[
    FieldDescription::new("label", "Device label."),
    FieldDescription::new(TEMPERATURE, "Composite temperature.").unit(Unit::Celsius),
    FieldDescription::new(PERCENTAGE_USED, "Vendor estimate of life used.").unit(Unit::Percent),
    FieldDescription::new(POWER_CYCLES, "Number of power cycles.").unit(Unit::Count),
    FieldDescription::new(AVAILABLE_SPARE, "Remaining spare capacity.").unit(Unit::Percent),
];

pub struct NvmePlugin {
    sampler: Box<dyn Sampler>,
    config: NvmeConfig,
}

impl NvmePlugin {
    pub fn new(sampler: Box<dyn Sampler>, config: NvmeConfig) -> Self {
        Self { sampler, config }
    }

    fn label(&self, device: &str) -> String {
        if let Some(alias) = self.config.alias.get(device) {
            return alias.clone();
        }
        let short = Path::new(device)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(device);
        format!("NVMe {}", short)
    }

    fn to_stats(&self, device: &str, counters: &Counters) -> Option<NvmeStats> {
        let temperature = *counters.get(TEMPERATURE)?;
        Some(NvmeStats {
            device: device.to_string(),
            label: self.label(device),
            temperature_celsius: temperature,
            percentage_used: counters.get(PERCENTAGE_USED).copied(),
            power_cycles: counters.get(POWER_CYCLES).copied(),
            available_spare: counters.get(AVAILABLE_SPARE).copied(),
            temperature_severity: classify(
                temperature as f64,
                Some(&self.config.temperature),
                None,
                None,
            ),
        })
    }
}

impl Plugin for NvmePlugin {
    type Stats = NvmeStats;

    fn name(&self) -> &'static str {
        "nvme"
    }

    fn fields(&self) -> &'static [FieldDescription] {
        FIELDS
    }

    fn is_disabled(&self) -> bool {
        self.config.disable
    }

    fn update(&mut self, _ctx: &mut TickContext) -> Vec<NvmeStats> {
        let mut stats = Vec::new();
        for device in &self.config.devices {
            match self.sampler.sample(device) {
                Ok(counters) => match self.to_stats(device, &counters) {
                    Some(s) => stats.push(s),
                    None => log::debug!("{}: no temperature reported", device),
                },
                Err(e) => log_source_error(device, &e),
            }
        }
        stats
    }

    fn render(&self, stats: &[NvmeStats], _ctx: &TickContext, width: usize) -> Vec<Row> {
        if stats.is_empty() || self.is_disabled() {
            return Vec::new();
        }

        let mut rows = vec![title_row("NVMe", &[("Temp", COLUMN_WIDTH)], width)];
        for device in stats {
            let severities =
                HashMap::from([(TEMPERATURE.to_string(), device.temperature_severity)]);
            let column = Column::new(
                Metric::gauge(TEMPERATURE, device.temperature_celsius as f64, Unit::Celsius),
                COLUMN_WIDTH,
            );
            let label = if device.label.is_empty() {
                self.label(&device.device)
            } else {
                device.label.clone()
            };
            rows.push(format_row(&label, &[column], &severities, width));

            if !self.config.show_health {
                continue;
            }
            let health = [
                ("  used", PERCENTAGE_USED, device.percentage_used, Unit::Percent),
                ("  spare", AVAILABLE_SPARE, device.available_spare, Unit::Percent),
                ("  power cycles", POWER_CYCLES, device.power_cycles, Unit::Count),
            ];
            for (label, name, value, unit) in health {
                let Some(value) = value else { continue };
                let column = Column::new(Metric::gauge(name, value as f64, unit), COLUMN_WIDTH);
                rows.push(format_row(label, &[column], &HashMap::new(), width));
            }
        }
        rows
    }
}
