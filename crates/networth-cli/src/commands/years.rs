use dialoguer::Confirm;

use crate::app::AppContext;
use crate::cli::{OutputArgs, YearAddArgs, YearRemoveArgs};
use crate::output::print_json;
use crate::ui::{badge, header, money, print, simple_table, Badge, Column};

use super::print_receipt;

pub fn handle_add(ctx: &AppContext, args: &YearAddArgs) -> anyhow::Result<()> {
    let (mut ledger, mut store) = ctx.open_ledger()?;
    let year = args.year.to_string();

    if !ledger.add_year(args.year) {
        if !ctx.quiet() {
            let ui = ctx.ui_context(false, None);
            if ui.mode.is_pretty() {
                print(&ui, &badge(&ui, Badge::Info, &format!("{} is already tracked", year)));
            } else {
                println!("status=unchanged");
                println!("year={}", year);
            }
        }
        return Ok(());
    }

    ctx.save_ledger(&ledger, &mut store)?;
    print_receipt(ctx, "Added year", &[("Year", &year)]);
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let (ledger, _store) = ctx.open_ledger()?;
    let ui = ctx.ui_context(args.json, args.format.as_deref());

    if ui.mode.is_json() {
        return print_json(&ledger.years());
    }

    let pretty = ui.mode.is_pretty();
    let rows: Vec<Vec<String>> = ledger
        .years()
        .into_iter()
        .map(|year| {
            vec![
                year.to_string(),
                ledger.assets(year).len().to_string(),
                ledger.liabilities(year).len().to_string(),
                money(ledger.net_worth(year), &ui.currency, pretty),
            ]
        })
        .collect();

    if pretty && !ctx.quiet() {
        print(&ui, &header(&ui, "years", None));
    }
    let columns = [
        Column::new("Year"),
        Column::numeric("Assets"),
        Column::numeric("Liabilities"),
        Column::numeric("Net worth"),
    ];
    print(&ui, &simple_table(&ui, &columns, &rows));
    Ok(())
}

pub fn handle_remove(ctx: &AppContext, args: &YearRemoveArgs) -> anyhow::Result<()> {
    let (mut ledger, mut store) = ctx.open_ledger()?;
    let ui = ctx.ui_context(false, None);

    if !args.yes && ui.is_interactive() {
        let records = ledger.assets(args.year).len() + ledger.liabilities(args.year).len();
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove {} and its {} records?",
                args.year, records
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            if !ctx.quiet() {
                print(&ui, &badge(&ui, Badge::Info, "Cancelled"));
            }
            return Ok(());
        }
    }

    ledger.remove_year(args.year)?;
    ctx.save_ledger(&ledger, &mut store)?;
    print_receipt(ctx, "Removed year", &[("Year", &args.year.to_string())]);
    Ok(())
}
