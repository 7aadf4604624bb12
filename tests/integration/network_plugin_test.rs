use std::thread;
use std::time::Duration;

use statline::core::system_monitor::Severity;
use statline::Config;

use super::support::{interface, rig};

fn network_config() -> Config {
    let mut config = Config::default();
    config.nvme.disable = true;
    config
}

#[test]
fn test_second_tick_produces_rates() {
    let mut rig = rig(&network_config());
    rig.network.set(vec![interface("eth0", 1_000, 0)]);

    let stats = rig.dashboard.tick().network.clone();
    assert_eq!(stats.len(), 1);
    assert!(stats[0].bytes_recv.rate_per_sec.is_none());
    // Title only until a rate exists
    assert_eq!(rig.dashboard.panels(40)[0].rows.len(), 1);

    thread::sleep(Duration::from_millis(100));
    rig.network.set(vec![interface("eth0", 2_000, 500)]);
    let stats = rig.dashboard.tick().network.clone();

    let rx = stats[0].bytes_recv.rate_per_sec.unwrap();
    let tx = stats[0].bytes_sent.rate_per_sec.unwrap();
    assert!(rx > 0.0 && rx <= 10_000.0, "rx rate {}", rx);
    assert!(tx > 0.0 && tx < rx);
    assert_eq!(stats[0].bytes_recv.gauge, 2_000);
    assert_eq!(stats[0].bytes_all.gauge, 2_500);

    let panels = rig.dashboard.panels(40);
    assert_eq!(panels[0].name, "network");
    assert_eq!(panels[0].rows.len(), 2);
    assert!(panels[0].rows[1].text().starts_with("eth0"));
}

#[test]
fn test_loopback_hidden_by_default() {
    let mut rig = rig(&network_config());
    rig.network
        .set(vec![interface("lo", 10, 10), interface("eth0", 10, 10)]);
    let names: Vec<_> = rig
        .dashboard
        .tick()
        .network
        .iter()
        .map(|s| s.interface_name.clone())
        .collect();
    assert_eq!(names, vec!["eth0".to_string()]);
}

#[test]
fn test_hide_no_up_and_hide_no_ip() {
    let mut config = network_config();
    config.network.hide_no_up = true;
    config.network.hide_no_ip = true;
    let mut rig = rig(&config);

    let mut down = interface("eth1", 0, 0);
    down.is_up = false;
    let mut no_ip = interface("eth2", 0, 0);
    no_ip.has_ip = false;
    rig.network.set(vec![interface("eth0", 0, 0), down, no_ip]);

    let stats = &rig.dashboard.tick().network;
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].interface_name, "eth0");
}

#[test]
fn test_hide_zero_until_traffic_seen() {
    let mut config = network_config();
    config.network.hide_zero = true;
    let mut rig = rig(&config);

    rig.network.set(vec![interface("eth0", 100, 100)]);
    rig.dashboard.tick();
    thread::sleep(Duration::from_millis(20));
    rig.dashboard.tick();
    assert_eq!(rig.dashboard.panels(40)[0].rows.len(), 1);

    thread::sleep(Duration::from_millis(20));
    rig.network.set(vec![interface("eth0", 900, 100)]);
    rig.dashboard.tick();
    assert_eq!(rig.dashboard.panels(40)[0].rows.len(), 2);

    // Stays visible once it has moved
    thread::sleep(Duration::from_millis(20));
    rig.dashboard.tick();
    assert_eq!(rig.dashboard.panels(40)[0].rows.len(), 2);
}

#[test]
fn test_explicit_threshold_alert() {
    let mut config = network_config();
    config.network.thresholds.insert(
        "eth0_rx".to_string(),
        statline::core::system_monitor::ThresholdSet::new(1.0, 2.0, 3.0).unwrap(),
    );
    let mut rig = rig(&config);

    rig.network.set(vec![interface("eth0", 0, 0)]);
    rig.dashboard.tick();
    thread::sleep(Duration::from_millis(50));
    rig.network.set(vec![interface("eth0", 1_000_000, 0)]);
    let stats = &rig.dashboard.tick().network;

    assert_eq!(stats[0].rx_severity, Severity::Critical);
    // No tx threshold and no link speed
    assert_eq!(stats[0].tx_severity, Severity::Default);
}

#[test]
fn test_vanished_interface_removed() {
    let mut rig = rig(&network_config());
    rig.network
        .set(vec![interface("eth0", 1, 1), interface("usb0", 1, 1)]);
    rig.dashboard.tick();
    assert_eq!(rig.dashboard.ctx.history.len(), 2);

    rig.network.set(Vec::new());
    assert!(rig.dashboard.tick().network.is_empty());
    assert!(rig.dashboard.ctx.history.is_empty());
    assert!(rig.dashboard.panels(40).is_empty());
}
