use serde::Serialize;

use networth_core::model::{SavingsCategory, SavingsUpdate};

use crate::app::AppContext;
use crate::cli::{IdArgs, OutputArgs, SavingsAddArgs, SavingsEditArgs, SavingsReportArgs};
use crate::helpers::{parse_day, resolve_id};
use crate::output::{print_json, savings_rows, SAVINGS_COLUMNS};
use crate::ui::{blank_line, header, hint, kv, money, percent, print, simple_table, Column};

use super::{nothing_to_change, print_receipt};

pub fn handle_add(ctx: &AppContext, args: &SavingsAddArgs) -> anyhow::Result<()> {
    let date = parse_day(&args.date)?;
    let category: SavingsCategory = args.category.parse()?;
    let (mut ledger, mut store) = ctx.open_ledger()?;
    let entry = ledger.add_savings_entry(date, args.amount, category, args.notes.as_str())?;
    ctx.save_ledger(&ledger, &mut store)?;

    let ui = ctx.ui_context(false, None);
    print_receipt(
        ctx,
        "Added savings entry",
        &[
            ("ID", &entry.id),
            ("Date", &entry.date.format("%Y-%m-%d").to_string()),
            ("Category", entry.category.label()),
            ("Amount", &money(entry.amount, &ui.currency, ui.mode.is_pretty())),
        ],
    );
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let (ledger, _store) = ctx.open_ledger()?;
    let entries = ledger.savings_history();
    let ui = ctx.ui_context(args.json, args.format.as_deref());

    if ui.mode.is_json() {
        return print_json(entries);
    }

    if ui.mode.is_pretty() && !ctx.quiet() {
        print(&ui, &header(&ui, "savings", None));
    }
    print(&ui, &simple_table(&ui, &SAVINGS_COLUMNS, &savings_rows(&ui, entries)));
    Ok(())
}

pub fn handle_edit(ctx: &AppContext, args: &SavingsEditArgs) -> anyhow::Result<()> {
    let mut update = SavingsUpdate::new();
    if let Some(date) = &args.date {
        update = update.date(parse_day(date)?);
    }
    if let Some(amount) = args.amount {
        update = update.amount(amount);
    }
    if let Some(category) = &args.category {
        update = update.category(category.parse()?);
    }
    if let Some(notes) = &args.notes {
        update = update.notes(notes.as_str());
    }
    if update.is_empty() {
        return Err(nothing_to_change());
    }

    let (mut ledger, mut store) = ctx.open_ledger()?;
    let id = resolve_id(ledger.savings_history().iter().map(|s| s.id.as_str()), &args.id)?;

    ledger.update_savings_entry(&id, update)?;
    ctx.save_ledger(&ledger, &mut store)?;
    print_receipt(ctx, "Updated savings entry", &[("ID", &id)]);
    Ok(())
}

pub fn handle_remove(ctx: &AppContext, args: &IdArgs) -> anyhow::Result<()> {
    let (mut ledger, mut store) = ctx.open_ledger()?;
    let id = resolve_id(ledger.savings_history().iter().map(|s| s.id.as_str()), &args.id)?;

    ledger.remove_savings_entry(&id)?;
    ctx.save_ledger(&ledger, &mut store)?;
    print_receipt(ctx, "Removed savings entry", &[("ID", &id)]);
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SavingsReport {
    by_category: Vec<CategoryTotal>,
    monthly_savings: f64,
    savings_percentage: f64,
    personal_pension_pct: f64,
    employer_pension_pct: f64,
}

#[derive(Serialize)]
struct CategoryTotal {
    category: SavingsCategory,
    total: f64,
}

pub fn handle_report(ctx: &AppContext, args: &SavingsReportArgs) -> anyhow::Result<()> {
    let (configured_personal, configured_employer) = ctx.pension_pcts()?;
    let personal = args.personal_pct.unwrap_or(configured_personal);
    let employer = args.employer_pct.unwrap_or(configured_employer);

    let (ledger, _store) = ctx.open_ledger()?;
    let report = SavingsReport {
        by_category: ledger
            .savings_by_category()
            .into_iter()
            .map(|(category, total)| CategoryTotal { category, total })
            .collect(),
        monthly_savings: ledger.total_monthly_savings(),
        savings_percentage: ledger.calculate_savings_percentage(personal, employer)?,
        personal_pension_pct: personal,
        employer_pension_pct: employer,
    };
    let ui = ctx.ui_context(args.output.json, args.output.format.as_deref());

    if ui.mode.is_json() {
        return print_json(&report);
    }

    let pretty = ui.mode.is_pretty();
    if pretty && !ctx.quiet() {
        print(&ui, &header(&ui, "savings report", None));
        blank_line(&ui);
    }
    print(
        &ui,
        &kv(&ui, "Monthly savings", &money(report.monthly_savings, &ui.currency, pretty)),
    );
    print(&ui, &kv(&ui, "Savings rate", &percent(report.savings_percentage)));

    if pretty && !report.by_category.is_empty() {
        blank_line(&ui);
        let rows: Vec<Vec<String>> = report
            .by_category
            .iter()
            .map(|c| vec![c.category.to_string(), money(c.total, &ui.currency, pretty)])
            .collect();
        let columns = [Column::new("Category"), Column::numeric("Total")];
        print(&ui, &simple_table(&ui, &columns, &rows));
    }
    if pretty && ledger.most_recent_salary().is_none() && !ctx.quiet() {
        print(
            &ui,
            &hint(&ui, "Add a salary with `networth salary add` to see a savings rate."),
        );
    }
    Ok(())
}
