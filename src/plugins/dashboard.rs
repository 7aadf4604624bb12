use std::time::Duration;

use serde::Serialize;

use super::{DiskIoPlugin, NetworkPlugin, NvmePlugin, Plugin};
use crate::core::config::Config;
use crate::core::system_monitor::{
    DiskIoSource, DiskIoStats, DisplayOptions, FieldDescription, InterfaceStats, NetworkSource,
    NvmeStats, Sampler, TickContext,
};
use crate::error::Result;
use crate::platform::{ProcDiskStats, SmartctlSampler, SysinfoNetworkSource};
use crate::ui::presenter::Row;

/// Stats of every enabled plugin for one tick
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardSnapshot {
    /// Unix seconds
    pub timestamp: i64,
    pub network: Vec<InterfaceStats>,
    pub diskio: Vec<DiskIoStats>,
    pub nvme: Vec<NvmeStats>,
}

/// Rendered rows of one plugin
#[derive(Debug, Clone)]
pub struct Panel {
    pub name: &'static str,
    pub rows: Vec<Row>,
}

/// Display host: owns the plugins and everything carried between ticks
pub struct Dashboard {
    pub ctx: TickContext,
    network: NetworkPlugin,
    diskio: DiskIoPlugin,
    nvme: NvmePlugin,
    last: DashboardSnapshot,
}

impl Dashboard {
    /// Build the dashboard on the local machine's sources
    pub fn new(config: &Config) -> Result<Self> {
        let smartctl = SmartctlSampler::new(
            config.nvme.smartctl.clone(),
            Duration::from_millis(config.nvme.timeout_ms),
        )?;
        Self::with_sources(
            config,
            Box::new(SysinfoNetworkSource::new()),
            Box::new(ProcDiskStats::new()),
            Box::new(smartctl),
        )
    }

    pub fn with_sources(
        config: &Config,
        network: Box<dyn NetworkSource>,
        disks: Box<dyn DiskIoSource>,
        nvme: Box<dyn Sampler>,
    ) -> Result<Self> {
        Ok(Self {
            ctx: TickContext::new(DisplayOptions::from(&config.general)),
            network: NetworkPlugin::new(network, config.network.clone())?,
            diskio: DiskIoPlugin::new(disks, config.diskio.clone())?,
            nvme: NvmePlugin::new(nvme, config.nvme.clone()),
            last: DashboardSnapshot::default(),
        })
    }

    /// Update every enabled plugin and keep the result as the current snapshot
    pub fn tick(&mut self) -> &DashboardSnapshot {
        let ctx = &mut self.ctx;
        self.last = DashboardSnapshot {
            timestamp: chrono::Utc::now().timestamp(),
            network: update(&mut self.network, ctx),
            diskio: update(&mut self.diskio, ctx),
            nvme: update(&mut self.nvme, ctx),
        };
        log::trace!(
            "tick: {} interfaces, {} disks, {} nvme devices",
            self.last.network.len(),
            self.last.diskio.len(),
            self.last.nvme.len()
        );
        &self.last
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.last
    }

    /// Render the current snapshot. Plugins with nothing to show are left out.
    pub fn panels(&self, width: usize) -> Vec<Panel> {
        [
            panel(&self.network, &self.last.network, &self.ctx, width),
            panel(&self.diskio, &self.last.diskio, &self.ctx, width),
            panel(&self.nvme, &self.last.nvme, &self.ctx, width),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Field table of every plugin, enabled or not
    pub fn fields(&self) -> Vec<(&'static str, &'static [FieldDescription])> {
        vec![
            (self.network.name(), self.network.fields()),
            (self.diskio.name(), self.diskio.fields()),
            (self.nvme.name(), self.nvme.fields()),
        ]
    }

    pub fn options(&self) -> DisplayOptions {
        self.ctx.options
    }

    pub fn set_options(&mut self, options: DisplayOptions) {
        self.ctx.options = options;
    }
}

fn update<P: Plugin>(plugin: &mut P, ctx: &mut TickContext) -> Vec<P::Stats> {
    if plugin.is_disabled() {
        return Vec::new();
    }
    plugin.update(ctx)
}

fn panel<P: Plugin>(plugin: &P, stats: &[P::Stats], ctx: &TickContext, width: usize) -> Option<Panel> {
    let rows = plugin.render(stats, ctx, width);
    (!rows.is_empty()).then(|| Panel {
        name: plugin.name(),
        rows,
    })
}
