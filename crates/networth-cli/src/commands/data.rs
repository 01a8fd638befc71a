//! Export, import and raw file backups.

use std::path::Path;

use dialoguer::Confirm;

use networth_core::fs::write_atomic;

use crate::app::{missing_ledger_message, AppContext};
use crate::cli::{BackupArgs, ExportArgs, ImportArgs};
use crate::config::expand_home;
use crate::errors::CliError;
use crate::ui::{badge, print, Badge};

use super::print_receipt;

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let (ledger, _store) = ctx.open_ledger()?;
    let document = ledger.export_json()?;

    let Some(output) = args.output.as_deref() else {
        println!("{}", document);
        return Ok(());
    };

    let destination = expand_home(output)?;
    write_atomic(&destination, document.as_bytes()).map_err(|e| {
        anyhow::anyhow!("Failed to write export {}: {}", destination.display(), e)
    })?;
    tracing::info!(path = %destination.display(), bytes = document.len(), "ledger exported");
    print_receipt(
        ctx,
        "Exported ledger",
        &[("Path", &destination.display().to_string())],
    );
    Ok(())
}

pub fn handle_import(ctx: &AppContext, args: &ImportArgs) -> anyhow::Result<()> {
    let source = expand_home(&args.file)?;
    if !source.exists() {
        return Err(CliError::not_found(
            format!("No file found at {}", source.display()),
            "Pass the path of a file written by `networth export`.",
        )
        .into());
    }
    let text = std::fs::read_to_string(&source)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", source.display(), e))?;

    let (mut ledger, mut store) = ctx.open_ledger()?;
    let ui = ctx.ui_context(false, None);
    if !args.yes && ui.is_interactive() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Replace everything in {} with {}?",
                store.path().display(),
                source.display()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            if !ctx.quiet() {
                print(&ui, &badge(&ui, Badge::Info, "Import cancelled"));
            }
            return Ok(());
        }
    }

    ledger.import_json(&text)?;
    ctx.save_ledger(&ledger, &mut store)?;
    print_receipt(
        ctx,
        "Imported ledger",
        &[
            ("Years", &ledger.years().len().to_string()),
            ("Milestones", &ledger.milestones().len().to_string()),
            ("Salary entries", &ledger.salary_history().len().to_string()),
            ("Savings entries", &ledger.savings_history().len().to_string()),
        ],
    );
    Ok(())
}

/// Copy the ledger file byte for byte.
pub fn handle_backup(ctx: &AppContext, args: &BackupArgs) -> anyhow::Result<()> {
    let source = ctx.ledger_path()?;
    if !source.exists() {
        return Err(CliError::not_found(
            missing_ledger_message(&source),
            "Run `networth init` to create it.",
        )
        .into());
    }
    let destination = expand_home(&args.destination)?;
    if destination == source {
        return Err(CliError::invalid_input("Backup destination is the ledger file itself").into());
    }
    let count = backup_copy(&source, &destination)?;
    if count == 0 {
        return Err(anyhow::anyhow!("Backup failed: zero bytes written"));
    }
    tracing::info!(
        source = %source.display(),
        destination = %destination.display(),
        bytes = count,
        "ledger backed up"
    );
    print_receipt(
        ctx,
        "Backed up ledger",
        &[
            ("Path", &destination.display().to_string()),
            ("Bytes", &count.to_string()),
        ],
    );
    Ok(())
}

fn backup_copy(source: &Path, destination: &Path) -> anyhow::Result<usize> {
    let bytes = std::fs::read(source)
        .map_err(|e| anyhow::anyhow!("Failed to read ledger {}: {}", source.display(), e))?;
    write_atomic(destination, &bytes).map_err(|e| {
        anyhow::anyhow!("Failed to write backup {}: {}", destination.display(), e)
    })?;
    Ok(bytes.len())
}
