//! The persisted state document.
//!
//! Shape (kept stable so older backups stay importable):
//!
//! ```json
//! {
//!   "years": { "2024": { "assets": [], "liabilities": [] } },
//!   "milestones": [],
//!   "salaryHistory": [],
//!   "savingsHistory": [],
//!   "emergencyFundGoal": 3
//! }
//! ```

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};
use crate::model::{new_id, non_negative, positive, Milestone, SalaryEntry, SavingsEntry, YearRecord};

/// Default emergency fund goal, in months of expenses.
pub const DEFAULT_EMERGENCY_FUND_GOAL: f64 = 3.0;

/// Target of the milestone every fresh ledger starts with.
pub const STARTER_MILESTONE_AMOUNT: f64 = 10_000.0;

fn default_emergency_fund_goal() -> f64 {
    DEFAULT_EMERGENCY_FUND_GOAL
}

/// Everything the ledger persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerState {
    pub years: BTreeMap<i32, YearRecord>,

    #[serde(default)]
    pub milestones: Vec<Milestone>,

    #[serde(default)]
    pub salary_history: Vec<SalaryEntry>,

    #[serde(default)]
    pub savings_history: Vec<SavingsEntry>,

    #[serde(default = "default_emergency_fund_goal")]
    pub emergency_fund_goal: f64,
}

impl LedgerState {
    /// A fresh ledger: one empty year and a starter milestone.
    pub fn starter(year: i32) -> Self {
        let mut years = BTreeMap::new();
        years.insert(year, YearRecord::default());
        Self {
            years,
            milestones: vec![Milestone {
                id: new_id(),
                amount: STARTER_MILESTONE_AMOUNT,
                name: "First 10K".to_string(),
                achieved: false,
                last_modified: None,
            }],
            salary_history: Vec::new(),
            savings_history: Vec::new(),
            emergency_fund_goal: DEFAULT_EMERGENCY_FUND_GOAL,
        }
    }

    /// Parse and validate a backup document.
    ///
    /// The document must be an object with a `years` object. Derived fields
    /// are taken as-is; the ledger recomputes them after accepting the state.
    pub fn from_backup(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| LedgerError::Import(format!("Backup is not valid JSON: {}", e)))?;

        let years_ok = value
            .as_object()
            .and_then(|object| object.get("years"))
            .map(|years| years.is_object())
            .unwrap_or(false);
        if !years_ok {
            return Err(LedgerError::Import(
                "Backup is missing the \"years\" object".to_string(),
            ));
        }

        let state: LedgerState = serde_json::from_value(value)
            .map_err(|e| LedgerError::Import(format!("Backup has an invalid shape: {}", e)))?;
        state
            .validate()
            .map_err(|e| LedgerError::Import(e.to_string()))?;
        Ok(state)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Storage(format!("Failed to serialize state: {}", e)))
    }

    /// Check every stored number and id.
    pub fn validate(&self) -> Result<()> {
        let mut ids = IdCheck::default();

        for (year, record) in &self.years {
            // Asset and liability ids only need to be unique within their year.
            let mut year_ids = IdCheck::default();
            for asset in &record.assets {
                year_ids.check("asset", &asset.id)?;
                non_negative(&format!("Asset \"{}\" ({}) value", asset.name, year), asset.value)?;
            }
            for liability in &record.liabilities {
                year_ids.check("liability", &liability.id)?;
                non_negative(
                    &format!("Liability {} ({}) value", liability.category, year),
                    liability.value,
                )?;
            }
        }
        for milestone in &self.milestones {
            ids.check("milestone", &milestone.id)?;
            positive(&format!("Milestone \"{}\" amount", milestone.name), milestone.amount)?;
        }
        for entry in &self.salary_history {
            ids.check("salary", &entry.id)?;
            non_negative(&format!("Salary {} amount", entry.date), entry.amount)?;
        }
        for entry in &self.savings_history {
            ids.check("savings", &entry.id)?;
            non_negative(&format!("Savings {} amount", entry.date), entry.amount)?;
        }
        non_negative("Emergency fund goal", self.emergency_fund_goal)?;
        Ok(())
    }
}

#[derive(Default)]
struct IdCheck {
    seen: HashSet<(&'static str, String)>,
}

impl IdCheck {
    fn check(&mut self, kind: &'static str, id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(LedgerError::Validation(format!("Empty {} id", kind)));
        }
        if !self.seen.insert((kind, id.to_string())) {
            return Err(LedgerError::Validation(format!(
                "Duplicate {} id \"{}\"",
                kind, id
            )));
        }
        Ok(())
    }
}
