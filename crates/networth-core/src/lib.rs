//! # Networth Core
//!
//! Core library for Networth - a personal net-worth tracker.
//!
//! This crate owns the financial data model and every calculation over it,
//! independent of any presentation layer or storage medium.
//!
//! ## Architecture
//!
//! - **model**: assets, liabilities, milestones, salary and savings records
//! - **ledger**: `FinancialLedger`, the single owner of all state
//! - **analytics**: growth policy and benchmark projections
//! - **state**: the persisted JSON document (import/export)
//! - **store**: blob persistence adapters
//! - **events**: change notification for presentation layers

pub mod analytics;
pub mod error;
pub mod events;
pub mod fs;
pub mod ledger;
pub mod model;
pub mod state;
pub mod store;

pub use analytics::{BenchmarkProjection, BenchmarkRates, GrowthPoint, NetWorthPoint};
pub use error::{LedgerError, Result};
pub use events::{LedgerChange, SubscriptionId};
pub use ledger::{
    EmergencyFundStatus, FinancialLedger, LoadOutcome, SalaryChartData, YearSummary,
};
pub use state::LedgerState;
pub use store::{JsonFileStore, MemoryStore, StateStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
