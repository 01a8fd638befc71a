//! Path resolution for config and ledger files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, expand_home, NetworthConfig};
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;

/// Resolve the config file path, checking NETWORTH_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the ledger file path from CLI args or config.
pub fn resolve_ledger_path(
    cli: &Cli,
    config: Option<&NetworthConfig>,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.ledger.as_deref() {
        return expand_home(path);
    }

    match config {
        Some(config) => config.ledger_path(),
        None => {
            let config_path = resolve_config_path()?;
            Err(CliError::not_found(
                format!("No config found at {}", config_path.display()),
                "Run `networth init`, or pass --ledger / set NETWORTH_PATH.",
            )
            .into())
        }
    }
}

/// Error message when ledger file is missing.
pub fn missing_ledger_message(path: &Path) -> String {
    format!("No ledger found at {}", path.display())
}
