use super::history::Counters;
use crate::error::Result;

/// Capability to sample one named source.
///
/// This is the only place where string-keyed counters exist; plugins translate
/// them into typed stats right after sampling. Implementations live in the
/// platform layer (smartctl today, native bindings later).
pub trait Sampler {
    /// Query `source_id` and return its counters, or an error meaning "no data
    /// this tick"
    fn sample(&mut self, source_id: &str) -> Result<Counters>;
}

/// One network interface as reported by the OS
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterfaceReading {
    pub name: String,
    pub bytes_recv: u64,
    pub bytes_sent: u64,
    pub is_up: bool,
    /// Link speed in bit/s, 0 when unknown
    pub speed: u64,
    pub mac_address: Option<String>,
    pub has_ip: bool,
}

/// Source of per-interface counters
pub trait NetworkSource {
    /// Interfaces present right now. Interfaces that vanished since the last
    /// call are simply missing from the list.
    fn interfaces(&mut self) -> Result<Vec<InterfaceReading>>;
}

/// One block device as reported by the OS
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskReading {
    pub name: String,
    pub read_bytes: u64,
    pub write_bytes: u64,
}

/// Source of per-disk byte counters
pub trait DiskIoSource {
    fn disks(&mut self) -> Result<Vec<DiskReading>>;
}
