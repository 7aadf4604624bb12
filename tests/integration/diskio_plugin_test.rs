use std::thread;
use std::time::Duration;

use statline::Config;

use super::support::{disk, rig};

fn disk_config() -> Config {
    let mut config = Config::default();
    config.network.disable = true;
    config.nvme.disable = true;
    config
}

fn pause() {
    thread::sleep(Duration::from_millis(20));
}

#[test]
fn test_rollback_resets_baseline() {
    let mut rig = rig(&disk_config());

    rig.disks.set(vec![disk("sda", 1_000, 0)]);
    rig.dashboard.tick();
    pause();
    rig.disks.set(vec![disk("sda", 2_000, 0)]);
    assert!(rig.dashboard.tick().diskio[0].read_bytes.rate_per_sec.is_some());

    // Counter went backwards: no rate this tick
    pause();
    rig.disks.set(vec![disk("sda", 500, 0)]);
    let stats = rig.dashboard.tick().diskio.clone();
    assert!(stats[0].read_bytes.rate_per_sec.is_none());
    assert!(stats[0].write_bytes.rate_per_sec.is_none());
    assert_eq!(stats[0].read_bytes.gauge, 500);

    // Next tick measures from the new baseline
    pause();
    rig.disks.set(vec![disk("sda", 1_500, 0)]);
    let rate = rig.dashboard.tick().diskio[0].read_bytes.rate_per_sec;
    assert!(rate.is_some_and(|r| r > 0.0));
}

#[test]
fn test_partitions_and_loop_devices_hidden() {
    let mut rig = rig(&disk_config());
    rig.disks.set(vec![
        disk("nvme0n1", 0, 0),
        disk("nvme0n1p1", 0, 0),
        disk("loop0", 0, 0),
        disk("sdb", 0, 0),
        disk("sdb2", 0, 0),
    ]);
    let names: Vec<_> = rig
        .dashboard
        .tick()
        .diskio
        .iter()
        .map(|d| d.disk_name.clone())
        .collect();
    assert_eq!(names, vec!["nvme0n1".to_string(), "sdb".to_string()]);
}

#[test]
fn test_cumulative_rows_on_first_tick() {
    let mut config = disk_config();
    config.general.cumulative = true;
    let mut rig = rig(&config);

    rig.disks.set(vec![disk("sda", 3 * 1024 * 1024, 0)]);
    rig.dashboard.tick();
    let panels = rig.dashboard.panels(30);
    assert_eq!(panels[0].name, "diskio");
    assert_eq!(panels[0].rows.len(), 2);
    assert!(panels[0].rows[0].text().ends_with("R      W"));
    assert_eq!(panels[0].rows[1].cells[1].text.trim(), "3.00MB");
}
