use statline::core::system_monitor::Severity;
use statline::platform::smartctl::{PERCENTAGE_USED, POWER_CYCLES, TEMPERATURE};
use statline::Config;

use super::support::{counters, rig};

fn nvme_config() -> Config {
    let mut config = Config::default();
    config.network.disable = true;
    config.diskio.disable = true;
    config
}

#[test]
fn test_tool_failure_omits_panel() {
    let mut rig = rig(&nvme_config());
    rig.nvme.set(None);

    assert!(rig.dashboard.tick().nvme.is_empty());
    assert!(rig.dashboard.panels(40).is_empty());
}

#[test]
fn test_recovers_on_next_tick() {
    let mut rig = rig(&nvme_config());
    rig.nvme.set(None);
    rig.dashboard.tick();

    rig.nvme.set(Some(counters(&[(TEMPERATURE, 47)])));
    let stats = rig.dashboard.tick().nvme.clone();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].device, "/dev/nvme0");
    assert_eq!(stats[0].temperature_severity, Severity::Careful);

    let panels = rig.dashboard.panels(24);
    assert_eq!(panels[0].name, "nvme");
    assert_eq!(panels[0].rows[1].text(), "NVMe nvme0           47C");
}

#[test]
fn test_one_row_per_device() {
    let mut config = nvme_config();
    config.nvme.devices = vec!["/dev/nvme0".to_string(), "/dev/nvme1".to_string()];
    config.nvme.show_health = true;
    let mut rig = rig(&config);
    rig.nvme.set(Some(counters(&[
        (TEMPERATURE, 62),
        (PERCENTAGE_USED, 3),
        (POWER_CYCLES, 10),
    ])));

    let stats = rig.dashboard.tick().nvme.clone();
    assert_eq!(stats.len(), 2);
    assert!(stats
        .iter()
        .all(|s| s.temperature_severity == Severity::Critical));

    // Title, then device row + used + power cycles for each device
    let rows = &rig.dashboard.panels(30)[0].rows;
    assert_eq!(rows.len(), 7);
    assert!(rows[2].text().trim_end().ends_with("3%"));
}
