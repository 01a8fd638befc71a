use std::path::PathBuf;

use networth_core::{FinancialLedger, JsonFileStore};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_ledger_path, expand_home, write_config, NetworthConfig};
use crate::errors::CliError;
use crate::ui::{hint, print};

use super::print_receipt;

/// Create the ledger file and, when needed, a config pointing at it.
///
/// The config is written when none exists yet or when `--path` names a
/// new location. An existing ledger is only replaced with `--force`.
pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ledger_path = init_ledger_path(ctx, args)?;
    let mut store = JsonFileStore::new(&ledger_path);

    if store.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("A ledger already exists at {}", ledger_path.display()),
            "Pass --force to replace it with an empty ledger.",
        )
        .into());
    }

    let ledger = match args.year {
        Some(year) => FinancialLedger::starting_in(year),
        None => FinancialLedger::new(),
    };
    ctx.save_ledger(&ledger, &mut store)?;

    let config_path = resolve_config_path()?;
    let write_new_config = args.path.is_some() || !config_path.exists();
    if write_new_config {
        write_config(&config_path, &NetworthConfig::new(&ledger_path))?;
        tracing::info!(path = %config_path.display(), "config written");
    }

    let year = ledger
        .latest_year()
        .map(|y| y.to_string())
        .unwrap_or_default();
    print_receipt(
        ctx,
        "Created ledger",
        &[
            ("Ledger", &ledger_path.display().to_string()),
            ("Config", &config_path.display().to_string()),
            ("Year", &year),
        ],
    );
    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        if ui.mode.is_pretty() {
            print(&ui, &hint(&ui, "networth asset add <CATEGORY> <NAME> <VALUE>"));
        }
    }
    Ok(())
}

fn init_ledger_path(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<PathBuf> {
    if let Some(path) = args.path.as_deref().or(ctx.cli().ledger.as_deref()) {
        return expand_home(path);
    }
    default_ledger_path()
}
