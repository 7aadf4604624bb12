use std::thread;
use std::time::Duration;

use statline::core::system_monitor::DisplayOptions;
use statline::Config;

use super::support::{disk, interface, rig};

#[test]
fn test_snapshot_serializes_to_json() {
    let mut rig = rig(&Config::default());
    rig.network.set(vec![interface("eth0", 10, 20)]);
    rig.disks.set(vec![disk("sda", 512, 0)]);

    let value = serde_json::to_value(rig.dashboard.tick()).unwrap();
    assert_eq!(value["network"][0]["interface_name"], "eth0");
    assert_eq!(value["network"][0]["bytes_sent"]["gauge"], 20);
    assert!(value["network"][0]["bytes_sent"]["rate_per_sec"].is_null());
    assert_eq!(value["network"][0]["rx_severity"], "default");
    assert_eq!(value["diskio"][0]["disk_name"], "sda");
    assert_eq!(value["nvme"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_disabled_plugins_are_skipped() {
    let mut config = Config::default();
    config.network.disable = true;
    let mut rig = rig(&config);
    rig.network.set(vec![interface("eth0", 10, 20)]);

    assert!(rig.dashboard.tick().network.is_empty());
    assert!(rig.dashboard.ctx.history.is_empty());
}

#[test]
fn test_rows_fill_the_width() {
    let mut rig = rig(&Config::default());
    rig.network.set(vec![
        interface("eth0", 0, 0),
        interface("a-very-long-interface-name", 0, 0),
    ]);
    rig.disks.set(vec![disk("nvme0n1", 0, 0)]);
    rig.dashboard.tick();
    thread::sleep(Duration::from_millis(20));
    rig.network.set(vec![
        interface("eth0", 4_000, 0),
        interface("a-very-long-interface-name", 9_000_000, 1),
    ]);
    rig.disks.set(vec![disk("nvme0n1", 1 << 20, 4096)]);
    rig.dashboard.tick();

    for width in [20, 32, 80] {
        let panels = rig.dashboard.panels(width);
        assert_eq!(panels.len(), 2);
        for row in panels.iter().flat_map(|p| p.rows.iter()) {
            assert_eq!(row.text().chars().count(), width, "{:?}", row.text());
        }
    }

    let rows = &rig.dashboard.panels(20)[0].rows;
    assert!(rows[1].text().starts_with("_-name"), "{}", rows[1].text());
}

#[test]
fn test_options_switch_rendering() {
    let mut rig = rig(&Config::default());
    rig.network.set(vec![interface("eth0", 1_000, 1_000)]);
    rig.dashboard.tick();
    thread::sleep(Duration::from_millis(20));
    rig.network.set(vec![interface("eth0", 2_000, 2_000)]);
    rig.dashboard.tick();

    let header = |rig: &super::support::Rig| rig.dashboard.panels(40)[0].rows[0].text();
    assert!(header(&rig).ends_with("Rx/s   Tx/s"));

    rig.dashboard.set_options(DisplayOptions {
        sum: true,
        ..Default::default()
    });
    assert!(header(&rig).ends_with("Rx+Tx/s"));

    rig.dashboard.set_options(DisplayOptions {
        cumulative: true,
        byte: true,
        sum: false,
    });
    assert!(header(&rig).ends_with("Rx     Tx"));
    let row = &rig.dashboard.panels(40)[0].rows[1];
    assert_eq!(row.cells[1].text.trim(), "1.95KB");
}

#[test]
fn test_field_tables() {
    let rig = rig(&Config::default());
    let fields = rig.dashboard.fields();
    let names: Vec<_> = fields.iter().map(|(plugin, _)| *plugin).collect();
    assert_eq!(names, vec!["network", "diskio", "nvme"]);

    let network_rates: Vec<_> = fields[0].1.iter().filter(|f| f.rate).map(|f| f.name).collect();
    assert_eq!(network_rates, vec!["bytes_recv", "bytes_sent", "bytes_all"]);
}
