use networth_core::model::{AssetCategory, AssetUpdate};

use crate::app::AppContext;
use crate::cli::{AssetAddArgs, AssetEditArgs, RecordListArgs, RecordRemoveArgs};
use crate::helpers::{resolve_id, target_year};
use crate::output::{asset_rows, print_json, ASSET_COLUMNS};
use crate::ui::{header, hint, kv, money, print, simple_table};

use super::{nothing_to_change, print_receipt};

pub fn handle_add(ctx: &AppContext, args: &AssetAddArgs) -> anyhow::Result<()> {
    let category: AssetCategory = args.category.parse()?;
    let (mut ledger, mut store) = ctx.open_ledger()?;
    let year = target_year(&ledger, args.year);

    let asset = ledger.add_asset(year, category, args.name.as_str(), args.value)?;
    ctx.save_ledger(&ledger, &mut store)?;

    let ui = ctx.ui_context(false, None);
    print_receipt(
        ctx,
        "Added asset",
        &[
            ("ID", &asset.id),
            ("Year", &year.to_string()),
            ("Category", asset.category.label()),
            ("Value", &money(asset.value, &ui.currency, ui.mode.is_pretty())),
        ],
    );
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &RecordListArgs) -> anyhow::Result<()> {
    let (ledger, _store) = ctx.open_ledger()?;
    let year = target_year(&ledger, args.year);
    let assets = ledger.assets(year);
    let ui = ctx.ui_context(args.output.json, args.output.format.as_deref());

    if ui.mode.is_json() {
        return print_json(assets);
    }

    let pretty = ui.mode.is_pretty();
    if pretty && !ctx.quiet() {
        print(&ui, &header(&ui, "assets", Some(&year.to_string())));
    }
    print(&ui, &simple_table(&ui, &ASSET_COLUMNS, &asset_rows(&ui, assets)));
    if pretty && !ctx.quiet() {
        let total = money(ledger.total_assets(year), &ui.currency, pretty);
        print(&ui, &kv(&ui, "Total", &total));
        if assets.is_empty() {
            print(&ui, &hint(&ui, "networth asset add <CATEGORY> <NAME> <VALUE>"));
        }
    }
    Ok(())
}

pub fn handle_edit(ctx: &AppContext, args: &AssetEditArgs) -> anyhow::Result<()> {
    let mut update = AssetUpdate::new();
    if let Some(category) = &args.category {
        update = update.category(category.parse()?);
    }
    if let Some(name) = &args.name {
        update = update.name(name.as_str());
    }
    if let Some(value) = args.value {
        update = update.value(value);
    }
    if update.is_empty() {
        return Err(nothing_to_change());
    }

    let (mut ledger, mut store) = ctx.open_ledger()?;
    let year = target_year(&ledger, args.year);
    let id = resolve_id(ledger.assets(year).iter().map(|a| a.id.as_str()), &args.id)?;

    ledger.update_asset(year, &id, update)?;
    ctx.save_ledger(&ledger, &mut store)?;
    print_receipt(ctx, "Updated asset", &[("ID", &id), ("Year", &year.to_string())]);
    Ok(())
}

pub fn handle_remove(ctx: &AppContext, args: &RecordRemoveArgs) -> anyhow::Result<()> {
    let (mut ledger, mut store) = ctx.open_ledger()?;
    let year = target_year(&ledger, args.year);
    let id = resolve_id(ledger.assets(year).iter().map(|a| a.id.as_str()), &args.id)?;

    ledger.remove_asset(year, &id)?;
    ctx.save_ledger(&ledger, &mut store)?;
    print_receipt(ctx, "Removed asset", &[("ID", &id), ("Year", &year.to_string())]);
    Ok(())
}
