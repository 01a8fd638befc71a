//! Command handlers, one module per command group.

pub mod assets;
pub mod data;
pub mod emergency_fund;
pub mod init;
pub mod liabilities;
pub mod milestones;
pub mod misc;
pub mod reports;
pub mod salary;
pub mod savings;
pub mod years;

use crate::app::AppContext;
use crate::errors::CliError;
use crate::ui::{print, receipt};

/// Print the receipt for a completed mutation unless `--quiet`.
fn print_receipt(ctx: &AppContext, title: &str, items: &[(&str, &str)]) {
    if ctx.quiet() {
        return;
    }
    let ui = ctx.ui_context(false, None);
    print(&ui, &receipt(&ui, title, items));
}

fn nothing_to_change() -> anyhow::Error {
    CliError::invalid_input_with_hint("Nothing to change", "Pass at least one field flag.").into()
}
