//! Net-worth history, growth and benchmarks.

use super::FinancialLedger;
use crate::analytics::{
    growth_series, project_benchmarks, BenchmarkProjection, BenchmarkRates, GrowthPoint,
    NetWorthPoint,
};
use crate::error::Result;

impl FinancialLedger {
    /// One point per recorded year, oldest first.
    pub fn net_worth_history(&self) -> Vec<NetWorthPoint> {
        self.state
            .years
            .iter()
            .map(|(year, record)| {
                let assets = record.total_assets();
                let liabilities = record.total_liabilities();
                NetWorthPoint {
                    year: *year,
                    net_worth: assets - liabilities,
                    assets,
                    liabilities,
                }
            })
            .collect()
    }

    /// Year-over-year growth for each consecutive pair of years.
    ///
    /// Empty with fewer than two years.
    pub fn growth_percentages(&self) -> Vec<GrowthPoint> {
        growth_series(&self.net_worth_history())
    }

    /// Project the first year's net worth forward at both benchmark rates.
    ///
    /// # Errors
    ///
    /// `LedgerError::InsufficientBaseline` when the first year's net worth
    /// is not positive.
    pub fn benchmark_projection(&self, rates: BenchmarkRates) -> Result<BenchmarkProjection> {
        project_benchmarks(&self.net_worth_history(), rates)
    }
}
