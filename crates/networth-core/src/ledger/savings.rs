//! Savings history, savings rate and the emergency fund.

use std::collections::BTreeMap;

use chrono::{Local, Months, NaiveDate, Utc};
use serde::Serialize;

use super::FinancialLedger;
use crate::error::{LedgerError, Result};
use crate::events::LedgerChange;
use crate::model::{
    new_id, non_negative, positive, AssetCategory, SavingsCategory, SavingsEntry, SavingsUpdate,
};

/// How far back `total_monthly_savings` looks.
const RECENT_MONTHS: u32 = 3;

/// Emergency fund coverage for a given level of monthly expenses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyFundStatus {
    pub goal_months: f64,
    pub monthly_expenses: f64,
    /// `goal_months * monthly_expenses`.
    pub target: f64,
    /// Cash and cash equivalents in the latest year.
    pub current: f64,
    pub months_covered: f64,
    pub shortfall: f64,
    pub goal_met: bool,
}

/// Most recent first. Entries sharing a date keep their insertion order.
pub(super) fn reorder(entries: &mut [SavingsEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

impl FinancialLedger {
    /// Savings entries, most recent first.
    pub fn savings_history(&self) -> &[SavingsEntry] {
        &self.state.savings_history
    }

    pub fn add_savings_entry(
        &mut self,
        date: NaiveDate,
        amount: f64,
        category: SavingsCategory,
        notes: impl Into<String>,
    ) -> Result<SavingsEntry> {
        let amount = non_negative("Savings amount", amount)?;
        let entry = SavingsEntry {
            id: new_id(),
            date,
            amount,
            category,
            notes: notes.into(),
            last_modified: None,
        };
        self.state.savings_history.push(entry.clone());
        reorder(&mut self.state.savings_history);
        tracing::debug!(%date, amount, %category, "savings entry added");
        self.changed(LedgerChange::Savings);
        Ok(entry)
    }

    pub fn update_savings_entry(&mut self, id: &str, update: SavingsUpdate) -> Result<()> {
        if let Some(amount) = update.amount {
            non_negative("Savings amount", amount)?;
        }
        let entry = self
            .state
            .savings_history
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| savings_not_found(id))?;

        if let Some(date) = update.date {
            entry.date = date;
        }
        if let Some(amount) = update.amount {
            entry.amount = amount;
        }
        if let Some(category) = update.category {
            entry.category = category;
        }
        if let Some(notes) = update.notes {
            entry.notes = notes;
        }
        entry.last_modified = Some(Utc::now());

        reorder(&mut self.state.savings_history);
        self.changed(LedgerChange::Savings);
        Ok(())
    }

    pub fn remove_savings_entry(&mut self, id: &str) -> Result<()> {
        let before = self.state.savings_history.len();
        self.state.savings_history.retain(|s| s.id != id);
        if self.state.savings_history.len() == before {
            return Err(savings_not_found(id));
        }
        self.changed(LedgerChange::Savings);
        Ok(())
    }

    /// Total saved per category over the whole history.
    pub fn savings_by_category(&self) -> BTreeMap<SavingsCategory, f64> {
        let mut totals = BTreeMap::new();
        for entry in &self.state.savings_history {
            *totals.entry(entry.category).or_insert(0.0) += entry.amount;
        }
        totals
    }

    /// Average monthly savings over the last three months, as of today.
    pub fn total_monthly_savings(&self) -> f64 {
        self.total_monthly_savings_at(Local::now().date_naive())
    }

    /// Average monthly savings over the three months before `today`.
    ///
    /// The sum of entries dated on or after `today - 3 months` is divided
    /// by the number of those entries, capped at 3. A single recent entry
    /// therefore counts in full.
    pub fn total_monthly_savings_at(&self, today: NaiveDate) -> f64 {
        let cutoff = today
            .checked_sub_months(Months::new(RECENT_MONTHS))
            .unwrap_or(NaiveDate::MIN);
        let (sum, count) = self
            .state
            .savings_history
            .iter()
            .filter(|s| s.date >= cutoff)
            .fold((0.0, 0usize), |(sum, count), s| (sum + s.amount, count + 1));
        if count == 0 {
            return 0.0;
        }
        sum / count.min(RECENT_MONTHS as usize) as f64
    }

    /// Savings rate as a percentage of monthly income, as of today.
    pub fn calculate_savings_percentage(&self, personal_pct: f64, employer_pct: f64) -> Result<f64> {
        self.calculate_savings_percentage_at(personal_pct, employer_pct, Local::now().date_naive())
    }

    /// Pension contributions plus recent savings over monthly income.
    ///
    /// Monthly income is the most recent salary divided by 12. Returns 0
    /// without a salary history or when the latest salary is 0.
    pub fn calculate_savings_percentage_at(
        &self,
        personal_pct: f64,
        employer_pct: f64,
        today: NaiveDate,
    ) -> Result<f64> {
        let personal_pct = non_negative("Personal pension percentage", personal_pct)?;
        let employer_pct = non_negative("Employer pension percentage", employer_pct)?;

        let income = match self.most_recent_salary() {
            Some(salary) if salary > 0.0 => salary / 12.0,
            _ => return Ok(0.0),
        };
        let personal = income * personal_pct / 100.0;
        let employer = income * employer_pct / 100.0;
        let saved = self.total_monthly_savings_at(today);
        Ok((personal + employer + saved) / income * 100.0)
    }

    /// Months of expenses the emergency fund should cover.
    pub fn emergency_fund_goal(&self) -> f64 {
        self.state.emergency_fund_goal
    }

    pub fn set_emergency_fund_goal(&mut self, months: f64) -> Result<()> {
        let months = non_negative("Emergency fund goal", months)?;
        self.state.emergency_fund_goal = months;
        self.changed(LedgerChange::EmergencyFundGoal);
        Ok(())
    }

    /// Compare the latest year's cash holdings with the goal.
    ///
    /// # Errors
    ///
    /// `LedgerError::Validation` when `monthly_expenses` is not positive.
    pub fn emergency_fund_status(&self, monthly_expenses: f64) -> Result<EmergencyFundStatus> {
        let monthly_expenses = positive("Monthly expenses", monthly_expenses)?;
        let goal_months = self.state.emergency_fund_goal;
        let current: f64 = self
            .latest_year()
            .map(|year| {
                self.assets(year)
                    .iter()
                    .filter(|a| a.category == AssetCategory::CashAndCashEquivalent)
                    .map(|a| a.value)
                    .sum()
            })
            .unwrap_or(0.0);
        let target = goal_months * monthly_expenses;

        Ok(EmergencyFundStatus {
            goal_months,
            monthly_expenses,
            target,
            current,
            months_covered: current / monthly_expenses,
            shortfall: (target - current).max(0.0),
            goal_met: current >= target,
        })
    }
}

fn savings_not_found(id: &str) -> LedgerError {
    LedgerError::NotFound(format!("savings entry \"{}\"", id))
}
