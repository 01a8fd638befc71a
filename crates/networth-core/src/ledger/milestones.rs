//! Net-worth milestones.

use chrono::Utc;

use super::FinancialLedger;
use crate::error::{LedgerError, Result};
use crate::events::LedgerChange;
use crate::model::{new_id, positive, Milestone, MilestoneUpdate};
use crate::state::LedgerState;

/// Recompute `achieved` against the latest year's net worth.
///
/// No-op without any year. Returns whether any flag flipped.
pub(super) fn refresh(state: &mut LedgerState) -> bool {
    let Some(net_worth) = state.years.values().next_back().map(|r| r.net_worth()) else {
        return false;
    };
    let mut flipped = false;
    for milestone in state.milestones.iter_mut() {
        let achieved = net_worth >= milestone.amount;
        if milestone.achieved != achieved {
            milestone.achieved = achieved;
            flipped = true;
        }
    }
    flipped
}

impl FinancialLedger {
    /// Milestones ordered by target amount, smallest first.
    pub fn milestones(&self) -> Vec<Milestone> {
        let mut milestones = self.state.milestones.clone();
        milestones.sort_by(|a, b| a.amount.total_cmp(&b.amount));
        milestones
    }

    /// The smallest milestone not yet reached.
    pub fn next_milestone(&self) -> Option<Milestone> {
        self.milestones().into_iter().find(|m| !m.achieved)
    }

    pub fn add_milestone(&mut self, amount: f64, name: impl Into<String>) -> Result<Milestone> {
        let amount = positive("Milestone amount", amount)?;
        let id = new_id();
        self.state.milestones.push(Milestone {
            id: id.clone(),
            amount,
            name: name.into(),
            achieved: false,
            last_modified: None,
        });
        refresh(&mut self.state);
        self.changed(LedgerChange::Milestones);
        self.milestone(&id)
            .cloned()
            .ok_or_else(|| LedgerError::NotFound(format!("milestone \"{}\"", id)))
    }

    pub fn update_milestone(&mut self, id: &str, update: MilestoneUpdate) -> Result<()> {
        if let Some(amount) = update.amount {
            positive("Milestone amount", amount)?;
        }
        let milestone = self
            .state
            .milestones
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| milestone_not_found(id))?;

        if let Some(amount) = update.amount {
            milestone.amount = amount;
        }
        if let Some(name) = update.name {
            milestone.name = name;
        }
        milestone.last_modified = Some(Utc::now());

        refresh(&mut self.state);
        self.changed(LedgerChange::Milestones);
        Ok(())
    }

    pub fn remove_milestone(&mut self, id: &str) -> Result<()> {
        let before = self.state.milestones.len();
        self.state.milestones.retain(|m| m.id != id);
        if self.state.milestones.len() == before {
            return Err(milestone_not_found(id));
        }
        self.changed(LedgerChange::Milestones);
        Ok(())
    }

    /// Recompute every milestone's `achieved` flag from the latest year.
    ///
    /// Mutations already keep the flags current; this is for callers that
    /// want to force a refresh before rendering. Subscribers are notified
    /// only when a flag flips.
    pub fn update_milestone_status(&mut self) {
        if refresh(&mut self.state) {
            self.changed(LedgerChange::Milestones);
        }
    }

    fn milestone(&self, id: &str) -> Option<&Milestone> {
        self.state.milestones.iter().find(|m| m.id == id)
    }
}

fn milestone_not_found(id: &str) -> LedgerError {
    LedgerError::NotFound(format!("milestone \"{}\"", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AssetCategory, LiabilityCategory};

    fn ledger_worth_12k() -> FinancialLedger {
        let mut ledger = FinancialLedger::starting_in(2024);
        let starter = ledger.milestones()[0].id.clone();
        ledger.remove_milestone(&starter).unwrap();
        ledger
            .add_asset(2024, AssetCategory::Investments, "Fund", 14_000.0)
            .unwrap();
        ledger
            .add_liability(2024, LiabilityCategory::PersonalLoans, 2_000.0)
            .unwrap();
        ledger
    }

    #[test]
    fn test_achievement_against_latest_year() {
        let mut ledger = ledger_worth_12k();
        assert_eq!(ledger.net_worth(2024), 12_000.0);

        let reached = ledger.add_milestone(10_000.0, "10K").unwrap();
        let pending = ledger.add_milestone(15_000.0, "15K").unwrap();
        assert!(reached.achieved);
        assert!(!pending.achieved);

        ledger
            .add_asset(2024, AssetCategory::CashAndCashEquivalent, "Bonus", 5_000.0)
            .unwrap();
        ledger.update_milestone_status();

        let milestones = ledger.milestones();
        assert!(milestones.iter().all(|m| m.achieved));
    }

    #[test]
    fn test_only_latest_year_counts() {
        let mut ledger = ledger_worth_12k();
        ledger.add_milestone(10_000.0, "10K").unwrap();
        assert!(ledger.milestones()[0].achieved);

        // A new, empty latest year resets progress.
        ledger.add_year(2025);
        assert!(!ledger.milestones()[0].achieved);

        // Older years do not count.
        ledger.add_year(2010);
        ledger
            .add_asset(2010, AssetCategory::Properties, "Old", 1_000_000.0)
            .unwrap();
        assert!(!ledger.milestones()[0].achieved);
    }

    #[test]
    fn test_sorted_by_amount_and_next() {
        let mut ledger = ledger_worth_12k();
        ledger.add_milestone(50_000.0, "50K").unwrap();
        ledger.add_milestone(5_000.0, "5K").unwrap();
        ledger.add_milestone(20_000.0, "20K").unwrap();

        let amounts: Vec<f64> = ledger.milestones().iter().map(|m| m.amount).collect();
        assert_eq!(amounts, vec![5_000.0, 20_000.0, 50_000.0]);
        assert_eq!(ledger.next_milestone().map(|m| m.name), Some("20K".to_string()));
    }

    #[test]
    fn test_update_rechecks_status() {
        let mut ledger = ledger_worth_12k();
        let milestone = ledger.add_milestone(20_000.0, "Stretch").unwrap();
        assert!(!milestone.achieved);

        ledger
            .update_milestone(&milestone.id, MilestoneUpdate::new().amount(11_000.0))
            .unwrap();

        let updated = &ledger.milestones()[0];
        assert!(updated.achieved);
        assert_eq!(updated.name, "Stretch");
    }

    #[test]
    fn test_invalid_and_unknown() {
        let mut ledger = ledger_worth_12k();
        assert!(ledger.add_milestone(0.0, "Zero").is_err());
        assert!(ledger.add_milestone(-10.0, "Negative").is_err());
        assert!(ledger
            .update_milestone("nope", MilestoneUpdate::new().name("x"))
            .unwrap_err()
            .is_not_found());
        assert!(ledger.remove_milestone("nope").unwrap_err().is_not_found());
    }
}
