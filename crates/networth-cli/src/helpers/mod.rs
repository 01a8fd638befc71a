//! Helper utilities for CLI commands.

mod parsing;

pub use parsing::{parse_day, parse_month, resolve_id, target_year};
