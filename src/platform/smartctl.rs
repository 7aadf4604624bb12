//! NVMe health via the smartmontools `smartctl` binary.
//!
//! The text output is matched line by line; anything that does not look like
//! the expected labels is treated as absent.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tokio::process::Command;
use tokio::runtime::Runtime;

use crate::core::system_monitor::{Counters, Sampler};
use crate::error::{Result, StatlineError};

pub const TEMPERATURE: &str = "temperature";
pub const POWER_CYCLES: &str = "power_cycles";
pub const PERCENTAGE_USED: &str = "percentage_used";
pub const AVAILABLE_SPARE: &str = "available_spare";

static TEMPERATURE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Temperature:\s+(\d+)\s+Celsius").expect("valid regex"));
static POWER_CYCLES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Power Cycles:\s+([\d,.]+)").expect("valid regex"));
static PERCENTAGE_USED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Percentage Used:\s+(\d+)%").expect("valid regex"));
static AVAILABLE_SPARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Available Spare:\s+(\d+)%").expect("valid regex"));

/// Runs `smartctl -a <device> -d nvme` with a deadline
pub struct SmartctlSampler {
    program: String,
    timeout: Duration,
    runtime: Runtime,
}

impl SmartctlSampler {
    pub fn new<S: Into<String>>(program: S, timeout: Duration) -> Result<Self> {
        // Private single-threaded runtime: the tick loop stays synchronous
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            program: program.into(),
            timeout,
            runtime,
        })
    }

    fn resolve_program(&self) -> Result<PathBuf> {
        which::which(&self.program).map_err(|e| {
            StatlineError::tool_not_installed(format!("{}: {}", self.program, e))
        })
    }

    fn run(&self, device: &str) -> Result<String> {
        let program = self.resolve_program()?;

        let mut command = Command::new(&program);
        command
            .args(["-a", device, "-d", "nvme"])
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let timeout = self.timeout;
        let output = self
            .runtime
            .block_on(async move { tokio::time::timeout(timeout, command.output()).await })
            .map_err(|_| StatlineError::Timeout(timeout.as_millis() as u64))??;

        if !output.status.success() {
            return Err(StatlineError::tool_failed(format!(
                "{} {} exited with {}",
                program.display(),
                device,
                output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Sampler for SmartctlSampler {
    fn sample(&mut self, source_id: &str) -> Result<Counters> {
        let stdout = self.run(source_id)?;
        parse_smartctl_output(&stdout)
    }
}

fn capture_number(re: &Regex, text: &str) -> Option<u64> {
    let raw = re.captures(text)?.get(1)?.as_str();
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Extract NVMe health counters from `smartctl -a` output.
///
/// The temperature line is required; the other counters are optional.
pub fn parse_smartctl_output(output: &str) -> Result<Counters> {
    let temperature = capture_number(&TEMPERATURE_RE, output)
        .ok_or_else(|| StatlineError::parse_failure("no Temperature line in smartctl output"))?;

    let mut counters = Counters::new();
    counters.insert(TEMPERATURE.to_string(), temperature);

    let optional = [
        (POWER_CYCLES, &*POWER_CYCLES_RE),
        (PERCENTAGE_USED, &*PERCENTAGE_USED_RE),
        (AVAILABLE_SPARE, &*AVAILABLE_SPARE_RE),
    ];
    for (name, re) in optional {
        if let Some(value) = capture_number(re, output) {
            counters.insert(name.to_string(), value);
        }
    }

    Ok(counters)
}
