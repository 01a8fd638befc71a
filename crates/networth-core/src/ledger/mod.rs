//! The financial ledger.
//!
//! `FinancialLedger` is the single owner of all tracked data. Every
//! mutation validates its input, keeps derived fields (salary increases,
//! milestone status) consistent and then notifies subscribers.
//!
//! Operations are split by concern:
//! - `years`: years, assets, liabilities and per-year totals
//! - `history`: net-worth history, growth and benchmarks
//! - `milestones`: net-worth targets
//! - `salary`: salary history and increases
//! - `savings`: savings history, averages and the emergency fund

mod history;
mod milestones;
mod salary;
mod savings;
mod years;

use chrono::{Datelike, Local};

use crate::error::{LedgerError, Result};
use crate::events::{ChangeNotifier, LedgerChange, SubscriptionId};
use crate::state::LedgerState;
use crate::store::StateStore;

pub use salary::SalaryChartData;
pub use savings::EmergencyFundStatus;
pub use years::YearSummary;

/// What a load found in the store.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Saved state was read back.
    Restored,
    /// Nothing was saved yet.
    Empty,
    /// Saved content could not be used; the ledger started fresh.
    Unreadable(LedgerError),
}

impl LoadOutcome {
    pub fn is_unreadable(&self) -> bool {
        matches!(self, Self::Unreadable(_))
    }
}

/// In-memory ledger of yearly assets and liabilities, milestones, salary
/// and savings history.
#[derive(Debug)]
pub struct FinancialLedger {
    state: LedgerState,
    notifier: ChangeNotifier,
}

impl FinancialLedger {
    /// A fresh ledger for the current calendar year.
    pub fn new() -> Self {
        Self::starting_in(Local::now().year())
    }

    /// A fresh ledger whose only year is `year`.
    pub fn starting_in(year: i32) -> Self {
        Self::from_trusted_state(LedgerState::starter(year))
    }

    /// Build a ledger from an existing state, validating it first.
    pub fn from_state(state: LedgerState) -> Result<Self> {
        state.validate()?;
        Ok(Self::from_trusted_state(state))
    }

    /// Restore a ledger from a saved blob.
    ///
    /// Missing, corrupt or invalid blobs fall back to a fresh ledger; the
    /// caller always gets a usable ledger.
    pub fn from_json_or_default(blob: Option<&str>) -> Self {
        Self::restore(blob).0
    }

    /// Load from a store, falling back to a fresh ledger on bad content.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` only when the store itself fails.
    pub fn load(store: &dyn StateStore) -> Result<Self> {
        Ok(Self::load_with_outcome(store)?.0)
    }

    /// Like [`load`](Self::load), also saying whether saved content was
    /// thrown away, so a caller can keep it before the next save.
    pub fn load_with_outcome(store: &dyn StateStore) -> Result<(Self, LoadOutcome)> {
        let blob = store.load()?;
        Ok(Self::restore(blob.as_deref()))
    }

    fn restore(blob: Option<&str>) -> (Self, LoadOutcome) {
        let Some(text) = blob else {
            tracing::debug!("no saved state, starting fresh");
            return (Self::new(), LoadOutcome::Empty);
        };
        match LedgerState::from_backup(text) {
            Ok(state) => (Self::from_trusted_state(state), LoadOutcome::Restored),
            Err(err) => {
                tracing::warn!(error = %err, "saved state unreadable, starting fresh");
                (Self::new(), LoadOutcome::Unreadable(err))
            }
        }
    }

    /// Write the whole state to a store.
    pub fn save(&self, store: &mut dyn StateStore) -> Result<()> {
        store.save(&self.export_json()?)
    }

    /// The full state as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String> {
        self.state.to_json_pretty()
    }

    /// Replace the whole state with a backup document.
    ///
    /// Nothing changes unless the document parses and validates.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Import` describing the first problem found.
    pub fn import_json(&mut self, text: &str) -> Result<()> {
        let state = LedgerState::from_backup(text)?;
        self.state = state;
        self.normalize();
        tracing::info!(
            years = self.state.years.len(),
            milestones = self.state.milestones.len(),
            salary_entries = self.state.salary_history.len(),
            savings_entries = self.state.savings_history.len(),
            "backup imported"
        );
        self.changed(LedgerChange::Replaced);
        Ok(())
    }

    /// Read-only view of the persisted state.
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Register an observer called after every successful mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&LedgerChange) + 'static,
    {
        self.notifier.subscribe(Box::new(observer))
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn from_trusted_state(state: LedgerState) -> Self {
        let mut ledger = Self {
            state,
            notifier: ChangeNotifier::default(),
        };
        ledger.normalize();
        ledger
    }

    /// Recompute every derived field from scratch.
    fn normalize(&mut self) {
        salary::reorder(&mut self.state.salary_history);
        savings::reorder(&mut self.state.savings_history);
        milestones::refresh(&mut self.state);
    }

    fn changed(&mut self, change: LedgerChange) {
        tracing::debug!(?change, "ledger changed");
        self.notifier.notify(change);
    }
}

impl Default for FinancialLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AssetCategory;
    use crate::store::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new_ledger_has_current_year_and_starter_milestone() {
        let ledger = FinancialLedger::new();
        assert_eq!(ledger.years(), vec![Local::now().year()]);
        assert_eq!(ledger.milestones().len(), 1);
        assert_eq!(ledger.emergency_fund_goal(), 3.0);
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_default() {
        let ledger = FinancialLedger::from_json_or_default(Some("{ not json"));
        assert_eq!(ledger.years().len(), 1);

        let ledger = FinancialLedger::from_json_or_default(Some(r#"{"milestones": []}"#));
        assert_eq!(ledger.milestones().len(), 1);
    }

    #[test]
    fn test_load_reports_discarded_content() {
        let mut store = MemoryStore::new();
        let (_, outcome) = FinancialLedger::load_with_outcome(&store).unwrap();
        assert!(matches!(outcome, LoadOutcome::Empty));

        store.save(r#"{"years": {"2024": {"assets": [{"#).unwrap();
        let (ledger, outcome) = FinancialLedger::load_with_outcome(&store).unwrap();
        assert!(outcome.is_unreadable());
        assert!(ledger.assets(ledger.years()[0]).is_empty());

        FinancialLedger::starting_in(2024).save(&mut store).unwrap();
        let (_, outcome) = FinancialLedger::load_with_outcome(&store).unwrap();
        assert!(matches!(outcome, LoadOutcome::Restored));
    }

    #[test]
    fn test_import_failure_leaves_state_untouched() {
        let mut ledger = FinancialLedger::starting_in(2024);
        ledger
            .add_asset(2024, AssetCategory::Investments, "Fund", 100.0)
            .unwrap();
        let before = ledger.state().clone();

        let err = ledger.import_json(r#"{"salaryHistory": []}"#).unwrap_err();
        assert!(matches!(err, LedgerError::Import(_)));
        assert_eq!(ledger.state(), &before);
    }

    #[test]
    fn test_import_recomputes_derived_fields() {
        let mut ledger = FinancialLedger::starting_in(2020);
        let backup = r#"{
            "years": {"2024": {"assets": [
                {"id": "a", "category": "Investments", "name": "Fund", "value": 20000}
            ]}},
            "milestones": [{"id": "m", "amount": 15000, "name": "Goal", "achieved": false}],
            "salaryHistory": [
                {"id": "s1", "date": "2023-01", "company": "A", "amount": 40000, "increasePercent": 99},
                {"id": "s2", "date": "2024-01", "company": "B", "amount": 44000}
            ]
        }"#;

        ledger.import_json(backup).unwrap();

        assert_eq!(ledger.years(), vec![2024]);
        assert!(ledger.milestones()[0].achieved);
        let history = ledger.salary_history();
        assert_eq!(history[0].id, "s2");
        assert!((history[0].increase_percent - 10.0).abs() < 1e-9);
        assert_eq!(history[1].increase_percent, 0.0);
    }

    #[test]
    fn test_save_and_load_through_store() {
        let mut store = MemoryStore::new();
        let mut ledger = FinancialLedger::starting_in(2024);
        ledger
            .add_asset(2024, AssetCategory::Properties, "Flat", 150_000.0)
            .unwrap();
        ledger.save(&mut store).unwrap();

        let restored = FinancialLedger::load(&store).unwrap();
        assert_eq!(restored.state(), ledger.state());
    }

    #[test]
    fn test_subscribers_see_changes_and_can_leave() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut ledger = FinancialLedger::starting_in(2024);
        let id = {
            let seen = Rc::clone(&seen);
            ledger.subscribe(move |change| seen.borrow_mut().push(*change))
        };

        ledger.set_emergency_fund_goal(6.0).unwrap();
        assert!(ledger.unsubscribe(id));
        ledger.set_emergency_fund_goal(4.0).unwrap();

        assert_eq!(*seen.borrow(), vec![LedgerChange::EmergencyFundGoal]);
    }
}
