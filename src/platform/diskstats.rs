//! Per-disk byte counters from /proc/diskstats.

use crate::core::system_monitor::{DiskIoSource, DiskReading};
use crate::error::Result;

/// The kernel always counts sectors in 512-byte units here
const SECTOR_SIZE: u64 = 512;

const DISKSTATS_PATH: &str = "/proc/diskstats";

/// Disk counters read from /proc/diskstats (Linux only)
#[derive(Debug, Default)]
pub struct ProcDiskStats;

impl ProcDiskStats {
    pub fn new() -> Self {
        Self
    }
}

impl DiskIoSource for ProcDiskStats {
    fn disks(&mut self) -> Result<Vec<DiskReading>> {
        #[cfg(target_os = "linux")]
        {
            let content = std::fs::read_to_string(DISKSTATS_PATH)?;
            Ok(parse_diskstats(&content))
        }
        #[cfg(not(target_os = "linux"))]
        {
            Err(crate::error::StatlineError::source_unavailable(format!(
                "{} is only available on Linux",
                DISKSTATS_PATH
            )))
        }
    }
}

/// Parse /proc/diskstats; malformed lines are skipped.
///
/// Fields: major minor name reads merged sectors_read ms writes merged
/// sectors_written ...
pub fn parse_diskstats(content: &str) -> Vec<DiskReading> {
    content
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 10 {
                return None;
            }
            let sectors_read = fields[5].parse::<u64>().ok()?;
            let sectors_written = fields[9].parse::<u64>().ok()?;
            Some(DiskReading {
                name: fields[2].to_string(),
                read_bytes: sectors_read.saturating_mul(SECTOR_SIZE),
                write_bytes: sectors_written.saturating_mul(SECTOR_SIZE),
            })
        })
        .collect()
}
