//! Network interface counters via sysinfo, link state via /sys on Linux.

use sysinfo::Networks;

use crate::core::system_monitor::{InterfaceReading, NetworkSource};
use crate::error::Result;

/// Interface counters backed by `sysinfo::Networks`
pub struct SysinfoNetworkSource {
    networks: Networks,
}

impl SysinfoNetworkSource {
    pub fn new() -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
        }
    }
}

impl Default for SysinfoNetworkSource {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkSource for SysinfoNetworkSource {
    fn interfaces(&mut self) -> Result<Vec<InterfaceReading>> {
        // Drops interfaces that disappeared since the last refresh
        self.networks.refresh(true);

        let readings = self
            .networks
            .iter()
            .map(|(name, data)| {
                let mac = data.mac_address().to_string();
                let link = read_link_state(name);
                InterfaceReading {
                    name: name.to_string(),
                    bytes_recv: data.total_received(),
                    bytes_sent: data.total_transmitted(),
                    is_up: link.is_up,
                    speed: link.speed,
                    mac_address: if mac == "00:00:00:00:00:00" {
                        None
                    } else {
                        Some(mac)
                    },
                    has_ip: !data.ip_networks().is_empty(),
                }
            })
            .collect();

        Ok(readings)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LinkState {
    pub is_up: bool,
    /// bit/s, 0 when unknown
    pub speed: u64,
}

/// Read operstate and speed from /sys/class/net/<interface>.
///
/// Missing files (other platforms, virtual links) mean "up, speed unknown".
fn read_link_state(interface_name: &str) -> LinkState {
    #[cfg(target_os = "linux")]
    {
        let base = std::path::Path::new("/sys/class/net").join(interface_name);
        let operstate = std::fs::read_to_string(base.join("operstate")).ok();
        let speed = std::fs::read_to_string(base.join("speed")).ok();
        parse_link_state(operstate.as_deref(), speed.as_deref())
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = interface_name;
        parse_link_state(None, None)
    }
}

/// `speed` is in Mb/s as the kernel reports it; -1 or garbage means unknown.
pub(crate) fn parse_link_state(operstate: Option<&str>, speed: Option<&str>) -> LinkState {
    let is_up = !matches!(
        operstate.map(str::trim),
        Some("down") | Some("lowerlayerdown") | Some("notpresent")
    );
    let speed = speed
        .and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|mbps| *mbps > 0)
        .map(|mbps| mbps as u64 * 1_000_000)
        .unwrap_or(0);

    LinkState { is_up, speed }
}
