//! Output formatting helpers for the CLI.

mod json;
mod text;

pub use json::print_json;
pub use text::{
    asset_rows, liability_rows, milestone_rows, salary_rows, savings_rows, ASSET_COLUMNS,
    LIABILITY_COLUMNS, MILESTONE_COLUMNS, SALARY_COLUMNS, SAVINGS_COLUMNS,
};
