// Fake sources shared by the dashboard tests

use std::cell::RefCell;
use std::rc::Rc;

use statline::core::system_monitor::{
    Counters, DiskIoSource, DiskReading, InterfaceReading, NetworkSource, Sampler,
};
use statline::{Config, Dashboard, Result, StatlineError};

/// Readings the test can change between ticks
#[derive(Clone, Default)]
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }
}

impl NetworkSource for Shared<Vec<InterfaceReading>> {
    fn interfaces(&mut self) -> Result<Vec<InterfaceReading>> {
        Ok(self.0.borrow().clone())
    }
}

impl DiskIoSource for Shared<Vec<DiskReading>> {
    fn disks(&mut self) -> Result<Vec<DiskReading>> {
        Ok(self.0.borrow().clone())
    }
}

/// Counters per call; `None` means the tool failed
impl Sampler for Shared<Option<Counters>> {
    fn sample(&mut self, source_id: &str) -> Result<Counters> {
        self.0.borrow().clone().ok_or_else(|| {
            StatlineError::tool_failed(format!("smartctl -a {} exited with 2", source_id))
        })
    }
}

pub struct Rig {
    pub dashboard: Dashboard,
    pub network: Shared<Vec<InterfaceReading>>,
    pub disks: Shared<Vec<DiskReading>>,
    pub nvme: Shared<Option<Counters>>,
}

pub fn rig(config: &Config) -> Rig {
    let network = Shared::default();
    let disks = Shared::default();
    let nvme = Shared::default();
    let dashboard = Dashboard::with_sources(
        config,
        Box::new(network.clone()),
        Box::new(disks.clone()),
        Box::new(nvme.clone()),
    )
    .unwrap();
    Rig {
        dashboard,
        network,
        disks,
        nvme,
    }
}

pub fn interface(name: &str, recv: u64, sent: u64) -> InterfaceReading {
    InterfaceReading {
        name: name.to_string(),
        bytes_recv: recv,
        bytes_sent: sent,
        is_up: true,
        speed: 0,
        mac_address: None,
        has_ip: true,
    }
}

pub fn disk(name: &str, read: u64, write: u64) -> DiskReading {
    DiskReading {
        name: name.to_string(),
        read_bytes: read,
        write_bytes: write,
    }
}

pub fn counters(pairs: &[(&str, u64)]) -> Counters {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}
