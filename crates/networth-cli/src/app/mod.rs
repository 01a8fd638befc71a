//! Application-level utilities for the Networth CLI.
//!
//! This module provides:
//! - Path resolution for config and ledger files
//! - The per-invocation context shared by every command handler

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::{missing_ledger_message, resolve_config_path, resolve_ledger_path};
