//! Parsing helpers for dates, years and record ids.

use chrono::{Datelike, Local, NaiveDate};

use networth_core::model::{parse_date, MonthYear};
use networth_core::FinancialLedger;

use crate::errors::CliError;

/// Parse a salary month (`YYYY-MM`, `M/YYYY` or a full date).
pub fn parse_month(value: &str) -> anyhow::Result<MonthYear> {
    value.parse::<MonthYear>().map_err(|_| {
        CliError::invalid_input_with_hint(
            format!("Invalid month: {}", value),
            "Use YYYY-MM, e.g. 2024-01.",
        )
        .into()
    })
}

/// Parse a savings date (`YYYY-MM-DD` or RFC 3339).
pub fn parse_day(value: &str) -> anyhow::Result<NaiveDate> {
    parse_date(value).map_err(|_| {
        CliError::invalid_input_with_hint(
            format!("Invalid date: {}", value),
            "Use YYYY-MM-DD, e.g. 2024-01-31.",
        )
        .into()
    })
}

/// The year a record command applies to: the flag, else the latest
/// recorded year, else the current calendar year.
pub fn target_year(ledger: &FinancialLedger, flag: Option<i32>) -> i32 {
    flag.or_else(|| ledger.latest_year())
        .unwrap_or_else(|| Local::now().year())
}

/// Expand an id or unique id prefix to the full id.
///
/// An exact match always wins. A prefix matching nothing is returned
/// unchanged so the ledger reports it as not found.
pub fn resolve_id<'a, I>(ids: I, given: &str) -> anyhow::Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut matches = Vec::new();
    for id in ids {
        if id == given {
            return Ok(id.to_string());
        }
        if id.starts_with(given) {
            matches.push(id);
        }
    }
    match matches.as_slice() {
        [] => Ok(given.to_string()),
        [only] => Ok(only.to_string()),
        _ => Err(CliError::invalid_input_with_hint(
            format!("ID prefix \"{}\" matches {} records", given, matches.len()),
            "Use more characters of the ID.",
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-01").unwrap(), MonthYear::new(2024, 1).unwrap());
        assert_eq!(parse_month("3/2023").unwrap(), MonthYear::new(2023, 3).unwrap());
        assert!(parse_month("January").is_err());
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(
            parse_day("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_day("2023-02-29").is_err());
    }

    #[test]
    fn test_target_year() {
        let ledger = FinancialLedger::starting_in(2021);
        assert_eq!(target_year(&ledger, Some(1999)), 1999);
        assert_eq!(target_year(&ledger, None), 2021);
    }

    #[test]
    fn test_resolve_id() {
        let ids = ["abc123", "abd456", "zzz"];
        assert_eq!(resolve_id(ids, "abc").unwrap(), "abc123");
        assert_eq!(resolve_id(ids, "zzz").unwrap(), "zzz");
        assert_eq!(resolve_id(ids, "nope").unwrap(), "nope");
        assert!(resolve_id(ids, "ab").is_err());
    }

    #[test]
    fn test_exact_match_beats_prefix() {
        let ids = ["ab", "abc"];
        assert_eq!(resolve_id(ids, "ab").unwrap(), "ab");
    }
}
