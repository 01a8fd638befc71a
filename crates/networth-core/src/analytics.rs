//! Calculations over the yearly net-worth series.
//!
//! Everything here is a pure function of an ascending series; the ledger
//! builds the series and delegates.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

/// Net worth and its components for one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthPoint {
    pub year: i32,
    pub net_worth: f64,
    pub assets: f64,
    pub liabilities: f64,
}

/// Year-over-year change between two consecutive recorded years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPoint {
    pub year: i32,
    pub previous_year: i32,
    pub growth: f64,
}

/// Annual compounding rates for the two benchmark series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRates {
    pub low: f64,
    pub high: f64,
}

impl BenchmarkRates {
    /// Rates used by the net-worth trend view (7% / 10%).
    pub const TREND: BenchmarkRates = BenchmarkRates {
        low: 0.07,
        high: 0.10,
    };

    /// Rates used by the comparison view (5% / 10%).
    pub const COMPARISON: BenchmarkRates = BenchmarkRates {
        low: 0.05,
        high: 0.10,
    };

    pub fn new(low: f64, high: f64) -> Result<Self> {
        for (label, rate) in [("low", low), ("high", high)] {
            if !rate.is_finite() || rate <= -1.0 {
                return Err(LedgerError::Validation(format!(
                    "Benchmark {} rate must be a finite number above -1 (got {})",
                    label, rate
                )));
            }
        }
        Ok(Self { low, high })
    }
}

impl Default for BenchmarkRates {
    fn default() -> Self {
        Self::TREND
    }
}

/// Actual net worth alongside two hypothetical compounding series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkProjection {
    pub rates: BenchmarkRates,
    pub years: Vec<i32>,
    pub actual: Vec<f64>,
    pub low: Vec<f64>,
    pub high: Vec<f64>,
}

/// Round half away from zero to `digits` decimal places.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).round() / factor
}

/// Percentage change from `previous` to `current`, meaningful across
/// sign changes.
///
/// | previous | current | result |
/// |----------|---------|--------|
/// | > 0      | any     | `(current - previous) / previous * 100` |
/// | < 0      | >= 0    | `100` |
/// | < 0      | < 0     | `(abs(previous) - abs(current)) / abs(previous) * 100` |
/// | 0        | > 0     | `100` |
/// | 0        | < 0     | `-100` |
/// | 0        | 0       | `0` |
pub fn growth_percentage(previous: f64, current: f64) -> f64 {
    let raw = if previous > 0.0 {
        (current - previous) / previous.abs() * 100.0
    } else if previous < 0.0 {
        if current >= 0.0 {
            100.0
        } else {
            (previous.abs() - current.abs()) / previous.abs() * 100.0
        }
    } else if current > 0.0 {
        100.0
    } else if current < 0.0 {
        -100.0
    } else {
        0.0
    };
    round_to(raw, 2)
}

/// Growth for each consecutive pair of an ascending history.
pub fn growth_series(history: &[NetWorthPoint]) -> Vec<GrowthPoint> {
    history
        .windows(2)
        .map(|pair| GrowthPoint {
            year: pair[1].year,
            previous_year: pair[0].year,
            growth: growth_percentage(pair[0].net_worth, pair[1].net_worth),
        })
        .collect()
}

/// Compound the first year's net worth forward at both benchmark rates.
///
/// The first point of an ascending history is the baseline; a missing or
/// non-positive baseline cannot be compounded meaningfully.
pub fn project_benchmarks(
    history: &[NetWorthPoint],
    rates: BenchmarkRates,
) -> Result<BenchmarkProjection> {
    let baseline = history.first().map(|p| p.net_worth).unwrap_or(0.0);
    if baseline <= 0.0 {
        return Err(LedgerError::InsufficientBaseline { baseline });
    }

    let compound = |rate: f64| -> Vec<f64> {
        (0..history.len())
            .map(|i| baseline * (1.0 + rate).powi(i as i32))
            .collect()
    };

    Ok(BenchmarkProjection {
        rates,
        years: history.iter().map(|p| p.year).collect(),
        actual: history.iter().map(|p| p.net_worth).collect(),
        low: compound(rates.low),
        high: compound(rates.high),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(year: i32, net_worth: f64) -> NetWorthPoint {
        NetWorthPoint {
            year,
            net_worth,
            assets: net_worth.max(0.0),
            liabilities: (-net_worth).max(0.0),
        }
    }

    #[test]
    fn test_growth_positive_previous() {
        assert_eq!(growth_percentage(1000.0, 1500.0), 50.0);
        assert_eq!(growth_percentage(1000.0, 500.0), -50.0);
    }

    #[test]
    fn test_growth_crossing_zero_is_flat_hundred() {
        assert_eq!(growth_percentage(-100.0, 50.0), 100.0);
        assert_eq!(growth_percentage(-100.0, 0.0), 100.0);
    }

    #[test]
    fn test_growth_shrinking_debt_is_positive() {
        assert_eq!(growth_percentage(-200.0, -50.0), 75.0);
        assert_eq!(growth_percentage(-100.0, -150.0), -50.0);
    }

    #[test]
    fn test_growth_from_zero() {
        assert_eq!(growth_percentage(0.0, 10.0), 100.0);
        assert_eq!(growth_percentage(0.0, -10.0), -100.0);
        assert_eq!(growth_percentage(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_growth_rounds_to_two_places() {
        assert_eq!(growth_percentage(3.0, 4.0), 33.33);
    }

    #[test]
    fn test_growth_series_needs_two_points() {
        assert!(growth_series(&[]).is_empty());
        assert!(growth_series(&[point(2024, 10.0)]).is_empty());

        let series = growth_series(&[point(2022, 100.0), point(2023, 150.0), point(2024, 75.0)]);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].year, 2023);
        assert_eq!(series[0].previous_year, 2022);
        assert_eq!(series[0].growth, 50.0);
        assert_eq!(series[1].growth, -50.0);
    }

    #[test]
    fn test_projection_compounds_from_first_year() {
        let history = [point(2022, 1000.0), point(2023, 1200.0), point(2024, 1300.0)];
        let projection = project_benchmarks(&history, BenchmarkRates::TREND).unwrap();

        assert_eq!(projection.years, vec![2022, 2023, 2024]);
        assert_eq!(projection.actual, vec![1000.0, 1200.0, 1300.0]);
        assert_eq!(projection.low[0], 1000.0);
        assert!((projection.low[2] - 1144.9).abs() < 1e-6);
        assert!((projection.high[1] - 1100.0).abs() < 1e-6);
    }

    #[test]
    fn test_projection_rejects_non_positive_baseline() {
        let err = project_benchmarks(&[point(2024, 0.0)], BenchmarkRates::COMPARISON).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBaseline { baseline } if baseline == 0.0));

        let err = project_benchmarks(&[point(2024, -5.0), point(2025, 10.0)], BenchmarkRates::TREND)
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBaseline { .. }));

        assert!(project_benchmarks(&[], BenchmarkRates::TREND).is_err());
    }

    #[test]
    fn test_rates_validation() {
        assert!(BenchmarkRates::new(0.05, 0.1).is_ok());
        assert!(BenchmarkRates::new(-1.0, 0.1).is_err());
        assert!(BenchmarkRates::new(0.05, f64::NAN).is_err());
        assert_eq!(BenchmarkRates::default(), BenchmarkRates::TREND);
    }
}
