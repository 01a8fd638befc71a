//! Networth CLI - track net worth, salary and savings from the terminal
//!
//! This is the command-line interface for Networth. It parses arguments,
//! opens the ledger file and hands off to `networth-core` for every
//! calculation.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use networth_core::VERSION;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::app::AppContext;
use crate::cli::{
    AssetSubcommand, Cli, Commands, EmergencyFundSubcommand, LiabilitySubcommand,
    MilestoneSubcommand, SalarySubcommand, SavingsSubcommand, YearSubcommand,
};
use crate::commands::{
    assets, data, emergency_fund, init, liabilities, milestones, misc, reports, salary, savings,
    years,
};
use crate::constants::LOG_ENV;
use crate::errors::{exit_code_for, hint_for};
use crate::ui::{print_error, Terminal};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.no_color);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let error_msg = format!("{:#}", e);
        let hint = hint_for(&e);

        tracing::debug!(error = ?e, "command failed");
        print_error(&ui_ctx, &error_msg, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Logs go to stderr. `NETWORTH_LOG` takes an `EnvFilter` directive and
/// wins over `--verbose`. Escapes only reach a color-capable terminal.
fn init_tracing(verbose: bool, no_color: bool) {
    let term = Terminal::detect();
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(term.paints(term.stderr_tty, no_color))
                .with_target(false),
        )
        .init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Year(args)) => match &args.command {
            YearSubcommand::Add(add_args) => years::handle_add(ctx, add_args)?,
            YearSubcommand::List(list_args) => years::handle_list(ctx, list_args)?,
            YearSubcommand::Remove(remove_args) => years::handle_remove(ctx, remove_args)?,
        },
        Some(Commands::Asset(args)) => match &args.command {
            AssetSubcommand::Add(add_args) => assets::handle_add(ctx, add_args)?,
            AssetSubcommand::List(list_args) => assets::handle_list(ctx, list_args)?,
            AssetSubcommand::Edit(edit_args) => assets::handle_edit(ctx, edit_args)?,
            AssetSubcommand::Remove(remove_args) => assets::handle_remove(ctx, remove_args)?,
        },
        Some(Commands::Liability(args)) => match &args.command {
            LiabilitySubcommand::Add(add_args) => liabilities::handle_add(ctx, add_args)?,
            LiabilitySubcommand::List(list_args) => liabilities::handle_list(ctx, list_args)?,
            LiabilitySubcommand::Edit(edit_args) => liabilities::handle_edit(ctx, edit_args)?,
            LiabilitySubcommand::Remove(remove_args) => {
                liabilities::handle_remove(ctx, remove_args)?
            }
        },
        Some(Commands::Summary(args)) => {
            reports::handle_summary(ctx, args)?;
        }
        Some(Commands::History(args)) => {
            reports::handle_history(ctx, args)?;
        }
        Some(Commands::Benchmark(args)) => {
            reports::handle_benchmark(ctx, args)?;
        }
        Some(Commands::Milestone(args)) => match &args.command {
            MilestoneSubcommand::Add(add_args) => milestones::handle_add(ctx, add_args)?,
            MilestoneSubcommand::List(list_args) => milestones::handle_list(ctx, list_args)?,
            MilestoneSubcommand::Edit(edit_args) => milestones::handle_edit(ctx, edit_args)?,
            MilestoneSubcommand::Remove(id_args) => milestones::handle_remove(ctx, id_args)?,
        },
        Some(Commands::Salary(args)) => match &args.command {
            SalarySubcommand::Add(add_args) => salary::handle_add(ctx, add_args)?,
            SalarySubcommand::List(list_args) => salary::handle_list(ctx, list_args)?,
            SalarySubcommand::Edit(edit_args) => salary::handle_edit(ctx, edit_args)?,
            SalarySubcommand::Remove(id_args) => salary::handle_remove(ctx, id_args)?,
            SalarySubcommand::Chart(chart_args) => salary::handle_chart(ctx, chart_args)?,
        },
        Some(Commands::Savings(args)) => match &args.command {
            SavingsSubcommand::Add(add_args) => savings::handle_add(ctx, add_args)?,
            SavingsSubcommand::List(list_args) => savings::handle_list(ctx, list_args)?,
            SavingsSubcommand::Edit(edit_args) => savings::handle_edit(ctx, edit_args)?,
            SavingsSubcommand::Remove(id_args) => savings::handle_remove(ctx, id_args)?,
            SavingsSubcommand::Report(report_args) => savings::handle_report(ctx, report_args)?,
        },
        Some(Commands::EmergencyFund(args)) => match &args.command {
            EmergencyFundSubcommand::Show(show_args) => {
                emergency_fund::handle_show(ctx, show_args)?
            }
            EmergencyFundSubcommand::Set(set_args) => emergency_fund::handle_set(ctx, set_args)?,
        },
        Some(Commands::Export(args)) => {
            data::handle_export(ctx, args)?;
        }
        Some(Commands::Import(args)) => {
            data::handle_import(ctx, args)?;
        }
        Some(Commands::Backup(args)) => {
            data::handle_backup(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Networth v{}", VERSION);
            println!("\nQuickstart:");
            println!("  networth init");
            println!("  networth asset add investments \"Index fund\" 12000");
            println!("  networth liability add student-loans 9000");
            println!("  networth summary");
            println!("  networth history");
            println!("\nRun `networth --help` for full usage.");
        }
    }

    Ok(())
}
