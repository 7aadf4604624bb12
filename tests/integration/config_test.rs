use statline::core::config::Config;
use statline::core::system_monitor::Severity;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load(Some(&temp_dir.path().join("absent.toml"))).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.general.refresh_ms, 2000);
    assert_eq!(config.network.hide, vec!["lo".to_string()]);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("statline.toml");
    fs::write(
        &path,
        r#"
[general]
byte = true

[network]
hide_zero = true

[network.thresholds.eth0_rx]
careful = 1000000.0
warning = 5000000.0
critical = 9000000.0

[network.alias]
wlp2s0 = "WIFI"

[nvme]
devices = ["/dev/nvme0", "/dev/nvme1"]
"#,
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert!(config.general.byte);
    assert_eq!(config.general.refresh_ms, 2000);
    assert!(config.network.hide_zero);
    assert_eq!(config.network.alias.get("wlp2s0").map(String::as_str), Some("WIFI"));
    assert_eq!(config.nvme.devices.len(), 2);
    assert_eq!(config.nvme.timeout_ms, 2000);

    let eth0 = &config.network.thresholds["eth0_rx"];
    assert_eq!(eth0.level(6_000_000.0), Severity::Warning);
}

#[test]
fn test_decreasing_thresholds_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("statline.toml");
    fs::write(
        &path,
        "[nvme.temperature]\ncareful = 60.0\nwarning = 50.0\ncritical = 70.0\n",
    )
    .unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(format!("{:#}", err).contains("nvme.temperature"));
}

#[test]
fn test_unknown_key_rejected() {
    assert!(Config::load_from_str("[network]\nhide_nothing = true\n").is_err());
}

#[test]
fn test_bad_filter_pattern_rejected() {
    assert!(Config::load_from_str("[diskio]\nhide = [\"sd(\"]\n").is_err());
}

#[test]
fn test_zero_timeout_rejected() {
    assert!(Config::load_from_str("[nvme]\ntimeout_ms = 0\n").is_err());
}
