use std::path::{Path, PathBuf};

use networth_core::BenchmarkRates;
use serde::{Deserialize, Serialize};

use crate::constants::{APP_DIR, LEDGER_FILE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworthConfig {
    pub ledger: LedgerSection,
    #[serde(default)]
    pub benchmarks: BenchmarksSection,
    #[serde(default)]
    pub savings: SavingsSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSection {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarksSection {
    pub low_rate: f64,
    pub high_rate: f64,
}

impl Default for BenchmarksSection {
    fn default() -> Self {
        let rates = BenchmarkRates::default();
        Self {
            low_rate: rates.low,
            high_rate: rates.high,
        }
    }
}

/// Pension contributions used by `savings report`, as % of salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SavingsSection {
    #[serde(default)]
    pub personal_pension_pct: f64,
    #[serde(default)]
    pub employer_pension_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "£".to_string()
}

impl NetworthConfig {
    pub fn new(ledger_path: &Path) -> Self {
        Self {
            ledger: LedgerSection {
                path: ledger_path.to_string_lossy().to_string(),
            },
            benchmarks: BenchmarksSection::default(),
            savings: SavingsSection::default(),
            ui: UiSection::default(),
        }
    }

    /// Configured ledger path with a leading `~/` expanded.
    pub fn ledger_path(&self) -> anyhow::Result<PathBuf> {
        expand_home(&self.ledger.path)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_ledger_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(LEDGER_FILE))
}

pub fn read_config(path: &Path) -> anyhow::Result<NetworthConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &NetworthConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join(APP_DIR));
        }
    }
    Ok(home_dir()?.join(".config").join(APP_DIR))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join(APP_DIR));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join(APP_DIR))
}

pub fn expand_home(value: &str) -> anyhow::Result<PathBuf> {
    match value.strip_prefix("~/") {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None => Ok(PathBuf::from(value)),
    }
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
