use serde::Serialize;

use networth_core::EmergencyFundStatus;

use crate::app::AppContext;
use crate::cli::{EmergencyFundSetArgs, EmergencyFundShowArgs};
use crate::output::print_json;
use crate::ui::{badge, blank_line, header, hint, kv, money, print, Badge, UiContext};

use super::print_receipt;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GoalOnly {
    goal_months: f64,
}

pub fn handle_show(ctx: &AppContext, args: &EmergencyFundShowArgs) -> anyhow::Result<()> {
    let (ledger, _store) = ctx.open_ledger()?;
    let status = args
        .monthly_expenses
        .map(|expenses| ledger.emergency_fund_status(expenses))
        .transpose()?;
    let ui = ctx.ui_context(args.output.json, args.output.format.as_deref());

    if ui.mode.is_json() {
        return match &status {
            Some(status) => print_json(status),
            None => print_json(&GoalOnly {
                goal_months: ledger.emergency_fund_goal(),
            }),
        };
    }

    let pretty = ui.mode.is_pretty();
    if pretty && !ctx.quiet() {
        print(&ui, &header(&ui, "emergency fund", None));
        blank_line(&ui);
    }
    print(
        &ui,
        &kv(&ui, "Goal months", &ledger.emergency_fund_goal().to_string()),
    );

    match status {
        Some(status) => print_status(ctx, &ui, &status),
        None if pretty && !ctx.quiet() => {
            print(
                &ui,
                &hint(&ui, "Pass --monthly-expenses to measure cash holdings against the goal."),
            );
        }
        None => {}
    }
    Ok(())
}

fn print_status(ctx: &AppContext, ui: &UiContext, status: &EmergencyFundStatus) {
    let pretty = ui.mode.is_pretty();
    let fmt = |value: f64| money(value, &ui.currency, pretty);

    print(ui, &kv(ui, "Target", &fmt(status.target)));
    print(ui, &kv(ui, "Current", &fmt(status.current)));
    print(ui, &kv(ui, "Months covered", &format!("{:.1}", status.months_covered)));

    if !pretty {
        print(ui, &kv(ui, "Shortfall", &fmt(status.shortfall)));
        print(ui, &kv(ui, "Goal met", &status.goal_met.to_string()));
        return;
    }
    if ctx.quiet() {
        return;
    }
    blank_line(ui);
    if status.goal_met {
        print(ui, &badge(ui, Badge::Ok, "Goal met"));
    } else {
        let message = format!("{} short of the goal", fmt(status.shortfall));
        print(ui, &badge(ui, Badge::Warn, &message));
    }
}

pub fn handle_set(ctx: &AppContext, args: &EmergencyFundSetArgs) -> anyhow::Result<()> {
    let (mut ledger, mut store) = ctx.open_ledger()?;
    ledger.set_emergency_fund_goal(args.months)?;
    ctx.save_ledger(&ledger, &mut store)?;
    print_receipt(
        ctx,
        "Updated emergency fund goal",
        &[("Goal months", &ledger.emergency_fund_goal().to_string())],
    );
    Ok(())
}
