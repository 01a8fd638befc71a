//! Salary history.

use chrono::Utc;
use serde::Serialize;

use super::FinancialLedger;
use crate::error::{LedgerError, Result};
use crate::events::LedgerChange;
use crate::model::{new_id, non_negative, MonthYear, SalaryEntry, SalaryUpdate};

/// Salary series in chronological order, ready for charting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SalaryChartData {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// Sort most recent first and recompute every increase.
///
/// Each entry is compared with the one after it (the chronologically
/// previous salary); the oldest entry is always 0.
pub(super) fn reorder(entries: &mut [SalaryEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    let len = entries.len();
    for i in 0..len {
        let increase = match entries.get(i + 1) {
            Some(previous) if previous.amount != 0.0 => {
                (entries[i].amount - previous.amount) / previous.amount * 100.0
            }
            _ => 0.0,
        };
        entries[i].increase_percent = increase;
    }
}

impl FinancialLedger {
    /// Salary entries, most recent first.
    pub fn salary_history(&self) -> &[SalaryEntry] {
        &self.state.salary_history
    }

    /// The latest salary amount, if any salary is recorded.
    pub fn most_recent_salary(&self) -> Option<f64> {
        self.state.salary_history.first().map(|s| s.amount)
    }

    pub fn add_salary_entry(
        &mut self,
        date: MonthYear,
        company: impl Into<String>,
        amount: f64,
    ) -> Result<SalaryEntry> {
        let amount = non_negative("Salary amount", amount)?;
        let id = new_id();
        self.state.salary_history.push(SalaryEntry {
            id: id.clone(),
            date,
            company: company.into(),
            amount,
            increase_percent: 0.0,
            last_modified: None,
        });
        reorder(&mut self.state.salary_history);
        tracing::debug!(%date, amount, "salary entry added");
        self.changed(LedgerChange::Salary);

        self.state
            .salary_history
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| salary_not_found(&id))
    }

    pub fn update_salary_entry(&mut self, id: &str, update: SalaryUpdate) -> Result<()> {
        if let Some(amount) = update.amount {
            non_negative("Salary amount", amount)?;
        }
        let entry = self
            .state
            .salary_history
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| salary_not_found(id))?;

        if let Some(date) = update.date {
            entry.date = date;
        }
        if let Some(company) = update.company {
            entry.company = company;
        }
        if let Some(amount) = update.amount {
            entry.amount = amount;
        }
        entry.last_modified = Some(Utc::now());

        reorder(&mut self.state.salary_history);
        self.changed(LedgerChange::Salary);
        Ok(())
    }

    pub fn remove_salary_entry(&mut self, id: &str) -> Result<()> {
        let before = self.state.salary_history.len();
        self.state.salary_history.retain(|s| s.id != id);
        if self.state.salary_history.len() == before {
            return Err(salary_not_found(id));
        }
        reorder(&mut self.state.salary_history);
        self.changed(LedgerChange::Salary);
        Ok(())
    }

    /// Oldest first, with `month/year` labels.
    pub fn salary_chart_data(&self) -> SalaryChartData {
        let mut chart = SalaryChartData::default();
        for entry in self.state.salary_history.iter().rev() {
            chart.labels.push(entry.date.chart_label());
            chart.data.push(entry.amount);
        }
        chart
    }
}

fn salary_not_found(id: &str) -> LedgerError {
    LedgerError::NotFound(format!("salary entry \"{}\"", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> MonthYear {
        MonthYear::new(year, month).unwrap()
    }

    #[test]
    fn test_increase_against_previous_entry() {
        let mut ledger = FinancialLedger::starting_in(2024);
        ledger.add_salary_entry(month(2023, 1), "Acme", 40_000.0).unwrap();
        let raise = ledger.add_salary_entry(month(2024, 1), "Acme", 44_000.0).unwrap();

        assert!((raise.increase_percent - 10.0).abs() < 1e-9);
        let history = ledger.salary_history();
        assert_eq!(history[0].date, month(2024, 1));
        assert_eq!(history[1].increase_percent, 0.0);
    }

    #[test]
    fn test_out_of_order_add_resorts() {
        let mut ledger = FinancialLedger::starting_in(2024);
        ledger.add_salary_entry(month(2024, 6), "B", 60_000.0).unwrap();
        ledger.add_salary_entry(month(2020, 1), "A", 30_000.0).unwrap();
        ledger.add_salary_entry(month(2022, 3), "A", 45_000.0).unwrap();

        let history = ledger.salary_history();
        let dates: Vec<MonthYear> = history.iter().map(|s| s.date).collect();
        assert_eq!(dates, vec![month(2024, 6), month(2022, 3), month(2020, 1)]);
        assert!((history[0].increase_percent - 33.333_333_333).abs() < 1e-6);
        assert!((history[1].increase_percent - 50.0).abs() < 1e-9);
        assert_eq!(history[2].increase_percent, 0.0);
        assert_eq!(ledger.most_recent_salary(), Some(60_000.0));
    }

    #[test]
    fn test_update_and_remove_recompute() {
        let mut ledger = FinancialLedger::starting_in(2024);
        let first = ledger.add_salary_entry(month(2022, 1), "A", 50_000.0).unwrap();
        let second = ledger.add_salary_entry(month(2023, 1), "A", 55_000.0).unwrap();
        ledger.add_salary_entry(month(2024, 1), "B", 66_000.0).unwrap();

        ledger
            .update_salary_entry(&first.id, SalaryUpdate::new().amount(44_000.0))
            .unwrap();
        let history = ledger.salary_history();
        assert!((history[1].increase_percent - 25.0).abs() < 1e-9);

        ledger.remove_salary_entry(&second.id).unwrap();
        let history = ledger.salary_history();
        assert_eq!(history.len(), 2);
        assert!((history[0].increase_percent - 50.0).abs() < 1e-9);
        assert_eq!(history[1].increase_percent, 0.0);
    }

    #[test]
    fn test_zero_previous_salary_gives_zero_increase() {
        let mut ledger = FinancialLedger::starting_in(2024);
        ledger.add_salary_entry(month(2023, 1), "Intern", 0.0).unwrap();
        let entry = ledger.add_salary_entry(month(2024, 1), "Job", 30_000.0).unwrap();
        assert_eq!(entry.increase_percent, 0.0);
    }

    #[test]
    fn test_chart_data_is_ascending() {
        let mut ledger = FinancialLedger::starting_in(2024);
        ledger.add_salary_entry(month(2024, 1), "A", 44_000.0).unwrap();
        ledger.add_salary_entry(month(2023, 1), "A", 40_000.0).unwrap();

        let chart = ledger.salary_chart_data();
        assert_eq!(chart.labels, vec!["1/2023", "1/2024"]);
        assert_eq!(chart.data, vec![40_000.0, 44_000.0]);
    }

    #[test]
    fn test_rejects_negative_and_unknown() {
        let mut ledger = FinancialLedger::starting_in(2024);
        assert!(ledger.add_salary_entry(month(2024, 1), "A", -1.0).is_err());
        assert!(ledger.salary_history().is_empty());
        assert!(ledger
            .update_salary_entry("nope", SalaryUpdate::new().company("X"))
            .unwrap_err()
            .is_not_found());
        assert!(ledger.remove_salary_entry("nope").unwrap_err().is_not_found());
    }
}
