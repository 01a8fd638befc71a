use networth_core::model::{LiabilityCategory, LiabilityUpdate};

use crate::app::AppContext;
use crate::cli::{LiabilityAddArgs, LiabilityEditArgs, RecordListArgs, RecordRemoveArgs};
use crate::helpers::{resolve_id, target_year};
use crate::output::{liability_rows, print_json, LIABILITY_COLUMNS};
use crate::ui::{header, kv, money, print, simple_table};

use super::{nothing_to_change, print_receipt};

pub fn handle_add(ctx: &AppContext, args: &LiabilityAddArgs) -> anyhow::Result<()> {
    let category: LiabilityCategory = args.category.parse()?;
    let (mut ledger, mut store) = ctx.open_ledger()?;
    let year = target_year(&ledger, args.year);

    let liability = ledger.add_liability(year, category, args.value)?;
    ctx.save_ledger(&ledger, &mut store)?;

    let ui = ctx.ui_context(false, None);
    print_receipt(
        ctx,
        "Added liability",
        &[
            ("ID", &liability.id),
            ("Year", &year.to_string()),
            ("Category", liability.category.label()),
            ("Value", &money(liability.value, &ui.currency, ui.mode.is_pretty())),
        ],
    );
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &RecordListArgs) -> anyhow::Result<()> {
    let (ledger, _store) = ctx.open_ledger()?;
    let year = target_year(&ledger, args.year);
    let liabilities = ledger.liabilities(year);
    let ui = ctx.ui_context(args.output.json, args.output.format.as_deref());

    if ui.mode.is_json() {
        return print_json(liabilities);
    }

    let pretty = ui.mode.is_pretty();
    if pretty && !ctx.quiet() {
        print(&ui, &header(&ui, "liabilities", Some(&year.to_string())));
    }
    print(
        &ui,
        &simple_table(&ui, &LIABILITY_COLUMNS, &liability_rows(&ui, liabilities)),
    );
    if pretty && !ctx.quiet() {
        let total = money(ledger.total_liabilities(year), &ui.currency, pretty);
        print(&ui, &kv(&ui, "Total", &total));
    }
    Ok(())
}

pub fn handle_edit(ctx: &AppContext, args: &LiabilityEditArgs) -> anyhow::Result<()> {
    let mut update = LiabilityUpdate::new();
    if let Some(category) = &args.category {
        update = update.category(category.parse()?);
    }
    if let Some(value) = args.value {
        update = update.value(value);
    }
    if update.is_empty() {
        return Err(nothing_to_change());
    }

    let (mut ledger, mut store) = ctx.open_ledger()?;
    let year = target_year(&ledger, args.year);
    let id = resolve_id(
        ledger.liabilities(year).iter().map(|l| l.id.as_str()),
        &args.id,
    )?;

    ledger.update_liability(year, &id, update)?;
    ctx.save_ledger(&ledger, &mut store)?;
    print_receipt(ctx, "Updated liability", &[("ID", &id), ("Year", &year.to_string())]);
    Ok(())
}

pub fn handle_remove(ctx: &AppContext, args: &RecordRemoveArgs) -> anyhow::Result<()> {
    let (mut ledger, mut store) = ctx.open_ledger()?;
    let year = target_year(&ledger, args.year);
    let id = resolve_id(
        ledger.liabilities(year).iter().map(|l| l.id.as_str()),
        &args.id,
    )?;

    ledger.remove_liability(year, &id)?;
    ctx.save_ledger(&ledger, &mut store)?;
    print_receipt(ctx, "Removed liability", &[("ID", &id), ("Year", &year.to_string())]);
    Ok(())
}
