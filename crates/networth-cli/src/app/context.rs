//! Application context for the Networth CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file so handlers
//! take a single parameter.

use std::cell::Cell;
use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use networth_core::{BenchmarkRates, FinancialLedger, JsonFileStore};

use crate::cli::Cli;
use crate::config::{read_config, NetworthConfig, UiSection};
use crate::errors::CliError;
use crate::ui::{print_warning, UiContext};

use super::resolver::{missing_ledger_message, resolve_config_path, resolve_ledger_path};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<NetworthConfig>>,
    /// The opened ledger file could not be parsed
    unreadable: Cell<bool>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
            unreadable: Cell::new(false),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, if one exists. Loaded once.
    pub fn config(&self) -> anyhow::Result<Option<&NetworthConfig>> {
        let config = self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file");
                return Ok::<_, anyhow::Error>(None);
            }
            tracing::debug!(path = %path.display(), "loading config");
            read_config(&path).map(Some)
        })?;
        Ok(config.as_ref())
    }

    pub fn ledger_path(&self) -> anyhow::Result<PathBuf> {
        resolve_ledger_path(self.cli, self.config()?)
    }

    /// Benchmark rates from config, falling back to the trend preset.
    pub fn benchmark_rates(&self) -> anyhow::Result<BenchmarkRates> {
        match self.config()? {
            Some(config) => Ok(BenchmarkRates::new(
                config.benchmarks.low_rate,
                config.benchmarks.high_rate,
            )?),
            None => Ok(BenchmarkRates::default()),
        }
    }

    /// Personal and employer pension contributions, % of salary.
    pub fn pension_pcts(&self) -> anyhow::Result<(f64, f64)> {
        Ok(self
            .config()?
            .map(|c| (c.savings.personal_pension_pct, c.savings.employer_pension_pct))
            .unwrap_or((0.0, 0.0)))
    }

    /// Build the UI context for a command's output flags.
    ///
    /// An unreadable config only costs the currency symbol here; the
    /// command itself reports the config error.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        let currency = match self.config() {
            Ok(Some(config)) => config.ui.currency.clone(),
            _ => UiSection::default().currency,
        };
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
            .with_currency(currency)
    }

    /// Open the ledger file named by `--ledger` or the config.
    ///
    /// An unparsable file opens as a fresh ledger and is moved aside by
    /// the next [`save_ledger`](Self::save_ledger).
    pub fn open_ledger(&self) -> anyhow::Result<(FinancialLedger, JsonFileStore)> {
        let path = self.ledger_path()?;
        let store = JsonFileStore::new(&path);
        if !store.exists() {
            return Err(CliError::not_found(
                missing_ledger_message(&path),
                "Run `networth init` to create it.",
            )
            .into());
        }
        let (ledger, outcome) = FinancialLedger::load_with_outcome(&store)?;
        self.unreadable.set(outcome.is_unreadable());
        Ok((ledger, store))
    }

    /// Write the ledger back to its file.
    pub fn save_ledger(
        &self,
        ledger: &FinancialLedger,
        store: &mut JsonFileStore,
    ) -> anyhow::Result<()> {
        if self.unreadable.replace(false) {
            let kept = store.set_aside()?;
            print_warning(
                &self.ui_context(false, None),
                &format!(
                    "{} was unreadable; kept it as {} and started a fresh ledger",
                    store.path().display(),
                    kept.display()
                ),
            );
        }
        ledger.save(store)?;
        Ok(())
    }
}
