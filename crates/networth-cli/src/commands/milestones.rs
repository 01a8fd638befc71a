use networth_core::model::MilestoneUpdate;

use crate::app::AppContext;
use crate::cli::{IdArgs, MilestoneAddArgs, MilestoneEditArgs, OutputArgs};
use crate::helpers::resolve_id;
use crate::output::{milestone_rows, print_json, MILESTONE_COLUMNS};
use crate::ui::{header, hint, money, print, simple_table};

use super::{nothing_to_change, print_receipt};

pub fn handle_add(ctx: &AppContext, args: &MilestoneAddArgs) -> anyhow::Result<()> {
    let (mut ledger, mut store) = ctx.open_ledger()?;
    let milestone = ledger.add_milestone(args.amount, args.name.as_str())?;
    ctx.save_ledger(&ledger, &mut store)?;

    let ui = ctx.ui_context(false, None);
    print_receipt(
        ctx,
        "Added milestone",
        &[
            ("ID", &milestone.id),
            ("Target", &money(milestone.amount, &ui.currency, ui.mode.is_pretty())),
            ("Achieved", &milestone.achieved.to_string()),
        ],
    );
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let (ledger, _store) = ctx.open_ledger()?;
    let milestones = ledger.milestones();
    let ui = ctx.ui_context(args.json, args.format.as_deref());

    if ui.mode.is_json() {
        return print_json(&milestones);
    }

    let pretty = ui.mode.is_pretty();
    if pretty && !ctx.quiet() {
        print(&ui, &header(&ui, "milestones", None));
    }
    print(
        &ui,
        &simple_table(&ui, &MILESTONE_COLUMNS, &milestone_rows(&ui, &milestones)),
    );

    if pretty && !ctx.quiet() {
        if let (Some(next), Some(year)) = (ledger.next_milestone(), ledger.latest_year()) {
            let remaining = next.amount - ledger.net_worth(year);
            let target = if next.name.is_empty() {
                "the next milestone"
            } else {
                next.name.as_str()
            };
            let message = format!(
                "{} to go until {}",
                money(remaining, &ui.currency, pretty),
                target
            );
            print(&ui, &hint(&ui, &message));
        }
    }
    Ok(())
}

pub fn handle_edit(ctx: &AppContext, args: &MilestoneEditArgs) -> anyhow::Result<()> {
    let mut update = MilestoneUpdate::new();
    if let Some(amount) = args.amount {
        update = update.amount(amount);
    }
    if let Some(name) = &args.name {
        update = update.name(name.as_str());
    }
    if update.is_empty() {
        return Err(nothing_to_change());
    }

    let (mut ledger, mut store) = ctx.open_ledger()?;
    let milestones = ledger.milestones();
    let id = resolve_id(milestones.iter().map(|m| m.id.as_str()), &args.id)?;

    ledger.update_milestone(&id, update)?;
    ctx.save_ledger(&ledger, &mut store)?;
    print_receipt(ctx, "Updated milestone", &[("ID", &id)]);
    Ok(())
}

pub fn handle_remove(ctx: &AppContext, args: &IdArgs) -> anyhow::Result<()> {
    let (mut ledger, mut store) = ctx.open_ledger()?;
    let milestones = ledger.milestones();
    let id = resolve_id(milestones.iter().map(|m| m.id.as_str()), &args.id)?;

    ledger.remove_milestone(&id)?;
    ctx.save_ledger(&ledger, &mut store)?;
    print_receipt(ctx, "Removed milestone", &[("ID", &id)]);
    Ok(())
}
