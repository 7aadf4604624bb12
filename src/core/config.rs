use anyhow::{Context, Result as AnyResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::system_monitor::ThresholdSet;
use crate::error::{Result, StatlineError};

const MIB: f64 = 1024.0 * 1024.0;

/// Dashboard configuration, loaded once at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub general: GeneralConfig,
    pub network: NetworkConfig,
    pub diskio: DiskIoConfig,
    pub nvme: NvmeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    /// Refresh interval of the display loop
    pub refresh_ms: u64,
    /// Show network rates in bytes instead of bits
    pub byte: bool,
    /// Show cumulative counters instead of rates
    pub cumulative: bool,
    /// Show Rx+Tx in a single column
    pub sum: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            refresh_ms: 2000,
            byte: false,
            cumulative: false,
            sum: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    pub disable: bool,
    /// Only interfaces matching one of these patterns are shown
    pub show: Vec<String>,
    /// Interfaces matching one of these patterns are hidden
    pub hide: Vec<String>,
    /// Hide interfaces whose rates have never been different from 0
    pub hide_zero: bool,
    pub hide_no_up: bool,
    pub hide_no_ip: bool,
    pub show_mac: bool,
    /// Percent of link speed, used when no per-interface threshold is set
    pub rx: ThresholdSet,
    pub tx: ThresholdSet,
    /// Per-interface bit/s thresholds keyed `<interface>_rx` / `<interface>_tx`
    pub thresholds: BTreeMap<String, ThresholdSet>,
    pub alias: BTreeMap<String, String>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        let percent = ThresholdSet {
            careful: Some(70.0),
            warning: Some(80.0),
            critical: Some(90.0),
        };
        Self {
            disable: false,
            show: Vec::new(),
            hide: vec!["lo".to_string()],
            hide_zero: false,
            hide_no_up: false,
            hide_no_ip: false,
            show_mac: false,
            rx: percent,
            tx: percent,
            thresholds: BTreeMap::new(),
            alias: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiskIoConfig {
    pub disable: bool,
    pub show: Vec<String>,
    pub hide: Vec<String>,
    pub hide_zero: bool,
    /// Bytes per second, used when no per-disk threshold is set
    pub read: ThresholdSet,
    pub write: ThresholdSet,
    /// Per-disk bytes/s thresholds keyed `<disk>_rx` (read) / `<disk>_tx` (write)
    pub thresholds: BTreeMap<String, ThresholdSet>,
    pub alias: BTreeMap<String, String>,
}

impl Default for DiskIoConfig {
    fn default() -> Self {
        let rate = ThresholdSet {
            careful: Some(1.0 * MIB),
            warning: Some(20.0 * MIB),
            critical: Some(50.0 * MIB),
        };
        Self {
            disable: false,
            show: Vec::new(),
            hide: [
                r"loop\d+",
                r"ram\d+",
                r"zram\d+",
                r"sr\d+",
                r"(sd|vd|xvd|hd)[a-z]+\d+",
                r"nvme\d+n\d+p\d+",
                r"mmcblk\d+p\d+",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            hide_zero: false,
            read: rate,
            write: rate,
            thresholds: BTreeMap::new(),
            alias: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NvmeConfig {
    pub disable: bool,
    pub devices: Vec<String>,
    /// smartctl binary name or path
    pub smartctl: String,
    pub timeout_ms: u64,
    /// Also show percentage used and power cycles
    pub show_health: bool,
    /// Celsius
    pub temperature: ThresholdSet,
    pub alias: BTreeMap<String, String>,
}

impl Default for NvmeConfig {
    fn default() -> Self {
        Self {
            disable: false,
            devices: vec!["/dev/nvme0".to_string()],
            smartctl: "smartctl".to_string(),
            timeout_ms: 2000,
            show_health: false,
            temperature: ThresholdSet {
                careful: Some(45.0),
                warning: Some(52.0),
                critical: Some(60.0),
            },
            alias: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> AnyResult<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::get_config_path()?,
        };

        if !config_path.exists() {
            log::debug!("No config at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        let data = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::load_from_str(&data)
            .with_context(|| format!("Invalid config file: {:?}", config_path))
    }

    /// Parse and validate config from a string
    pub fn load_from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn get_config_path() -> AnyResult<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("statline").join("statline.toml"))
    }

    /// Default configuration rendered as TOML
    pub fn default_toml() -> AnyResult<String> {
        toml::to_string_pretty(&Config::default()).context("Failed to serialize default config")
    }

    pub fn validate(&self) -> Result<()> {
        if self.general.refresh_ms == 0 {
            return Err(StatlineError::config("general.refresh_ms must be > 0"));
        }
        if self.nvme.timeout_ms == 0 {
            return Err(StatlineError::config("nvme.timeout_ms must be > 0"));
        }
        if self.nvme.smartctl.trim().is_empty() {
            return Err(StatlineError::config("nvme.smartctl must be non-empty"));
        }

        let named_sets = [
            ("network.rx", &self.network.rx),
            ("network.tx", &self.network.tx),
            ("diskio.read", &self.diskio.read),
            ("diskio.write", &self.diskio.write),
            ("nvme.temperature", &self.nvme.temperature),
        ];
        for (name, set) in named_sets {
            set.validate()
                .map_err(|e| StatlineError::config(format!("{}: {}", name, e)))?;
        }
        for (section, map) in [
            ("network", &self.network.thresholds),
            ("diskio", &self.diskio.thresholds),
        ] {
            for (key, set) in map {
                set.validate().map_err(|e| {
                    StatlineError::config(format!("{}.thresholds.{}: {}", section, key, e))
                })?;
            }
        }

        NameFilter::new(&self.network.show, &self.network.hide)?;
        NameFilter::new(&self.diskio.show, &self.diskio.hide)?;
        Ok(())
    }
}

/// Show/hide filter on source names; patterns must match the whole name
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    show: Vec<Regex>,
    hide: Vec<Regex>,
}

impl NameFilter {
    pub fn new(show: &[String], hide: &[String]) -> Result<Self> {
        let compile = |patterns: &[String]| -> Result<Vec<Regex>> {
            patterns
                .iter()
                .map(|p| Regex::new(&format!("^(?:{})$", p)).map_err(StatlineError::from))
                .collect()
        };
        Ok(Self {
            show: compile(show)?,
            hide: compile(hide)?,
        })
    }

    /// A non-empty show list takes precedence over the hide list
    pub fn is_display(&self, name: &str) -> bool {
        if !self.show.is_empty() {
            return self.show.iter().any(|r| r.is_match(name));
        }
        !self.hide.iter().any(|r| r.is_match(name))
    }
}
