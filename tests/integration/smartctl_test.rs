#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use statline::core::system_monitor::Sampler;
use statline::platform::smartctl::{PERCENTAGE_USED, POWER_CYCLES, TEMPERATURE};
use statline::platform::SmartctlSampler;
use statline::StatlineError;
use tempfile::TempDir;

/// Write an executable shell script standing in for smartctl
fn fake_smartctl(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("smartctl");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn sampler(program: &Path, timeout_ms: u64) -> SmartctlSampler {
    SmartctlSampler::new(
        program.to_string_lossy().into_owned(),
        Duration::from_millis(timeout_ms),
    )
    .unwrap()
}

#[test]
fn test_reads_health_lines() {
    let temp_dir = TempDir::new().unwrap();
    let program = fake_smartctl(
        temp_dir.path(),
        r#"[ "$1" = "-a" ] && [ "$3" = "-d" ] && [ "$4" = "nvme" ] || exit 1
cat <<OUT
SMART/Health Information (NVMe Log 0x02)
Temperature:                        39 Celsius
Percentage Used:                    1%
Power Cycles:                       87
OUT"#,
    );

    let counters = sampler(&program, 2000).sample("/dev/nvme0").unwrap();
    assert_eq!(counters.get(TEMPERATURE), Some(&39));
    assert_eq!(counters.get(PERCENTAGE_USED), Some(&1));
    assert_eq!(counters.get(POWER_CYCLES), Some(&87));
}

#[test]
fn test_nonzero_exit_is_tool_failure() {
    let temp_dir = TempDir::new().unwrap();
    let program = fake_smartctl(
        temp_dir.path(),
        "echo 'Temperature: 39 Celsius'\nexit 4",
    );

    let err = sampler(&program, 2000).sample("/dev/nvme0").unwrap_err();
    assert!(matches!(err, StatlineError::ToolFailed(_)), "{}", err);
}

#[test]
fn test_hung_tool_times_out() {
    let temp_dir = TempDir::new().unwrap();
    let program = fake_smartctl(temp_dir.path(), "exec sleep 10");

    let started = Instant::now();
    let err = sampler(&program, 200).sample("/dev/nvme0").unwrap_err();
    assert!(matches!(err, StatlineError::Timeout(200)), "{}", err);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test]
fn test_garbage_output_is_parse_failure() {
    let temp_dir = TempDir::new().unwrap();
    let program = fake_smartctl(temp_dir.path(), "echo 'Read Device Identity failed'");

    let err = sampler(&program, 2000).sample("/dev/nvme0").unwrap_err();
    assert!(matches!(err, StatlineError::ParseFailure(_)), "{}", err);
}
