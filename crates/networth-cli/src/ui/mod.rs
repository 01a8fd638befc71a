//! UI primitives for the Networth CLI.
//!
//! This module provides:
//! - **Context**: Terminal detection and output mode (json, plain, pretty)
//! - **Theme**: Badge tokens and color styles
//! - **Render**: Tables, headers, receipts, hints, bars
//! - **Format**: Money, percentages and short ids
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{UiContext, OutputMode, Badge};
//! use crate::ui::render::{header, table, badge, hint};
//!
//! let ctx = UiContext::from_env(args.json, args.format.as_deref(), cli.no_color, cli.ascii);
//!
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", header(&ctx, "summary", Some("2024")));
//! println!("{}", table(&ctx, &columns, &rows));
//! ```

mod context;
pub mod format;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::{OutputMode, Terminal, UiContext};
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{
    badge, bar, blank_line, header, hint, kv, print, print_error, print_warning, receipt,
    simple_table, table, Column,
};

// Re-export commonly used format functions
pub use format::{money, percent, short_id, truncate};
