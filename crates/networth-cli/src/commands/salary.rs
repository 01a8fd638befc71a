use networth_core::model::SalaryUpdate;

use crate::app::AppContext;
use crate::cli::{IdArgs, OutputArgs, SalaryAddArgs, SalaryEditArgs};
use crate::helpers::{parse_month, resolve_id};
use crate::output::{print_json, salary_rows, SALARY_COLUMNS};
use crate::ui::{bar, header, money, percent, print, simple_table};

use super::{nothing_to_change, print_receipt};

/// Room left for the label and amount beside each chart bar.
const CHART_GUTTER: usize = 30;

pub fn handle_add(ctx: &AppContext, args: &SalaryAddArgs) -> anyhow::Result<()> {
    let date = parse_month(&args.date)?;
    let (mut ledger, mut store) = ctx.open_ledger()?;
    let entry = ledger.add_salary_entry(date, args.company.as_str(), args.amount)?;
    ctx.save_ledger(&ledger, &mut store)?;

    let ui = ctx.ui_context(false, None);
    print_receipt(
        ctx,
        "Added salary entry",
        &[
            ("ID", &entry.id),
            ("Month", &entry.date.to_string()),
            ("Amount", &money(entry.amount, &ui.currency, ui.mode.is_pretty())),
            ("Increase", &percent(entry.increase_percent)),
        ],
    );
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let (ledger, _store) = ctx.open_ledger()?;
    let entries = ledger.salary_history();
    let ui = ctx.ui_context(args.json, args.format.as_deref());

    if ui.mode.is_json() {
        return print_json(entries);
    }

    if ui.mode.is_pretty() && !ctx.quiet() {
        print(&ui, &header(&ui, "salary", None));
    }
    print(&ui, &simple_table(&ui, &SALARY_COLUMNS, &salary_rows(&ui, entries)));
    Ok(())
}

pub fn handle_edit(ctx: &AppContext, args: &SalaryEditArgs) -> anyhow::Result<()> {
    let mut update = SalaryUpdate::new();
    if let Some(date) = &args.date {
        update = update.date(parse_month(date)?);
    }
    if let Some(company) = &args.company {
        update = update.company(company.as_str());
    }
    if let Some(amount) = args.amount {
        update = update.amount(amount);
    }
    if update.is_empty() {
        return Err(nothing_to_change());
    }

    let (mut ledger, mut store) = ctx.open_ledger()?;
    let id = resolve_id(ledger.salary_history().iter().map(|s| s.id.as_str()), &args.id)?;

    ledger.update_salary_entry(&id, update)?;
    ctx.save_ledger(&ledger, &mut store)?;
    print_receipt(ctx, "Updated salary entry", &[("ID", &id)]);
    Ok(())
}

pub fn handle_remove(ctx: &AppContext, args: &IdArgs) -> anyhow::Result<()> {
    let (mut ledger, mut store) = ctx.open_ledger()?;
    let id = resolve_id(ledger.salary_history().iter().map(|s| s.id.as_str()), &args.id)?;

    ledger.remove_salary_entry(&id)?;
    ctx.save_ledger(&ledger, &mut store)?;
    print_receipt(ctx, "Removed salary entry", &[("ID", &id)]);
    Ok(())
}

/// Salary over time, oldest first.
pub fn handle_chart(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let (ledger, _store) = ctx.open_ledger()?;
    let chart = ledger.salary_chart_data();
    let ui = ctx.ui_context(args.json, args.format.as_deref());

    if ui.mode.is_json() {
        return print_json(&chart);
    }

    let pretty = ui.mode.is_pretty();
    if !pretty {
        for (label, amount) in chart.labels.iter().zip(&chart.data) {
            println!("{}\t{:.2}", label, amount);
        }
        return Ok(());
    }

    if !ctx.quiet() {
        print(&ui, &header(&ui, "salary chart", None));
    }
    let max = chart.data.iter().copied().fold(0.0_f64, f64::max);
    let width = ui.width.saturating_sub(CHART_GUTTER).max(10);
    let label_width = chart.labels.iter().map(|l| l.len()).max().unwrap_or(0);
    for (label, amount) in chart.labels.iter().zip(&chart.data) {
        print(
            &ui,
            &format!(
                "{:>lw$}  {}  {}",
                label,
                bar(&ui, *amount, max, width),
                money(*amount, &ui.currency, pretty),
                lw = label_width
            ),
        );
    }
    Ok(())
}
