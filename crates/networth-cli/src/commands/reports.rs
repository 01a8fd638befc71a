//! Read-only views: year summary, history and benchmarks.

use serde::Serialize;

use networth_core::{BenchmarkRates, GrowthPoint, NetWorthPoint};

use crate::app::AppContext;
use crate::cli::{BenchmarkArgs, OutputArgs, SummaryArgs};
use crate::helpers::target_year;
use crate::output::print_json;
use crate::ui::theme::{signed_style, styled};
use crate::ui::{blank_line, header, kv, money, percent, print, simple_table, table, Column};

pub fn handle_summary(ctx: &AppContext, args: &SummaryArgs) -> anyhow::Result<()> {
    let (ledger, _store) = ctx.open_ledger()?;
    let year = target_year(&ledger, args.year);
    let summary = ledger.year_summary(year);
    let ui = ctx.ui_context(args.output.json, args.output.format.as_deref());

    if ui.mode.is_json() {
        return print_json(&summary);
    }

    let pretty = ui.mode.is_pretty();
    let fmt = |value: f64| money(value, &ui.currency, pretty);

    if pretty && !ctx.quiet() {
        print(&ui, &header(&ui, "summary", Some(&year.to_string())));
        blank_line(&ui);
    }
    if !pretty {
        print(&ui, &kv(&ui, "Year", &year.to_string()));
    }
    print(&ui, &kv(&ui, "Total assets", &fmt(summary.total_assets)));
    print(&ui, &kv(&ui, "Total liabilities", &fmt(summary.total_liabilities)));
    let net_worth = styled(
        &fmt(summary.net_worth),
        signed_style(summary.net_worth),
        ui.color,
    );
    print(&ui, &kv(&ui, "Net worth", &net_worth));
    print(
        &ui,
        &kv(&ui, "Debt-to-asset ratio", &format!("{:.2}", summary.debt_to_asset_ratio)),
    );

    // Plain mode stops at the totals; breakdowns are a pretty-only view.
    if !pretty {
        return Ok(());
    }

    let columns = [Column::new("Category"), Column::numeric("Total")];
    if !summary.assets_by_category.is_empty() {
        blank_line(&ui);
        let rows: Vec<Vec<String>> = summary
            .assets_by_category
            .iter()
            .map(|(category, total)| vec![category.to_string(), fmt(*total)])
            .collect();
        print(&ui, &simple_table(&ui, &columns, &rows));
    }
    if !summary.liabilities_by_category.is_empty() {
        blank_line(&ui);
        let rows: Vec<Vec<String>> = summary
            .liabilities_by_category
            .iter()
            .map(|(category, total)| vec![category.to_string(), fmt(*total)])
            .collect();
        print(&ui, &simple_table(&ui, &columns, &rows));
    }
    Ok(())
}

#[derive(Serialize)]
struct HistoryReport {
    history: Vec<NetWorthPoint>,
    growth: Vec<GrowthPoint>,
}

pub fn handle_history(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let (ledger, _store) = ctx.open_ledger()?;
    let report = HistoryReport {
        history: ledger.net_worth_history(),
        growth: ledger.growth_percentages(),
    };
    let ui = ctx.ui_context(args.json, args.format.as_deref());

    if ui.mode.is_json() {
        return print_json(&report);
    }

    let pretty = ui.mode.is_pretty();
    let rows: Vec<Vec<String>> = report
        .history
        .iter()
        .map(|point| {
            let growth = report
                .growth
                .iter()
                .find(|g| g.year == point.year)
                .map(|g| styled(&percent(g.growth), signed_style(g.growth), ui.color))
                .unwrap_or_default();
            vec![
                point.year.to_string(),
                money(point.assets, &ui.currency, pretty),
                money(point.liabilities, &ui.currency, pretty),
                money(point.net_worth, &ui.currency, pretty),
                growth,
            ]
        })
        .collect();

    if pretty && !ctx.quiet() {
        print(&ui, &header(&ui, "history", None));
    }
    let columns = [
        Column::new("Year"),
        Column::numeric("Assets"),
        Column::numeric("Liabilities"),
        Column::numeric("Net worth"),
        Column::numeric("Growth"),
    ];
    print(&ui, &table(&ui, &columns, &rows));
    Ok(())
}

pub fn handle_benchmark(ctx: &AppContext, args: &BenchmarkArgs) -> anyhow::Result<()> {
    let rates = resolve_rates(ctx, args)?;
    let (ledger, _store) = ctx.open_ledger()?;
    let projection = ledger.benchmark_projection(rates)?;
    let ui = ctx.ui_context(args.output.json, args.output.format.as_deref());

    if ui.mode.is_json() {
        return print_json(&projection);
    }

    let pretty = ui.mode.is_pretty();
    let fmt = |value: f64| money(value, &ui.currency, pretty);
    let rows: Vec<Vec<String>> = projection
        .years
        .iter()
        .enumerate()
        .map(|(i, year)| {
            vec![
                year.to_string(),
                fmt(projection.actual[i]),
                fmt(projection.low[i]),
                fmt(projection.high[i]),
            ]
        })
        .collect();

    if pretty && !ctx.quiet() {
        let rates_label = format!(
            "{} / {}",
            percent(rates.low * 100.0),
            percent(rates.high * 100.0)
        );
        print(&ui, &header(&ui, "benchmark", Some(&rates_label)));
    }
    let columns = [
        Column::new("Year"),
        Column::numeric("Actual"),
        Column::numeric("Low"),
        Column::numeric("High"),
    ];
    print(&ui, &table(&ui, &columns, &rows));
    Ok(())
}

/// Flags override the configured rates one at a time.
fn resolve_rates(ctx: &AppContext, args: &BenchmarkArgs) -> anyhow::Result<BenchmarkRates> {
    let configured = ctx.benchmark_rates()?;
    let rates = BenchmarkRates::new(
        args.low_rate.unwrap_or(configured.low),
        args.high_rate.unwrap_or(configured.high),
    )?;
    tracing::debug!(low = rates.low, high = rates.high, "benchmark rates");
    Ok(rates)
}
