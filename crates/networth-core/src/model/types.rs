//! Records owned by the ledger.
//!
//! Field names serialize in camelCase to stay compatible with existing
//! backups.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::category::{AssetCategory, LiabilityCategory, SavingsCategory};
use super::dates::{calendar_date, MonthYear};

/// Generate a fresh opaque record id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Assets and liabilities recorded for one calendar year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    #[serde(default)]
    pub assets: Vec<Asset>,

    #[serde(default)]
    pub liabilities: Vec<Liability>,
}

impl YearRecord {
    pub fn total_assets(&self) -> f64 {
        self.assets.iter().map(|a| a.value).sum()
    }

    pub fn total_liabilities(&self) -> f64 {
        self.liabilities.iter().map(|l| l.value).sum()
    }

    pub fn net_worth(&self) -> f64 {
        self.total_assets() - self.total_liabilities()
    }
}

/// Something the user owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub category: AssetCategory,
    #[serde(default)]
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

/// Something the user owes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    pub id: String,
    pub category: LiabilityCategory,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

/// A target net worth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub amount: f64,
    #[serde(default)]
    pub name: String,

    /// Derived: net worth of the latest year has reached `amount`.
    #[serde(default)]
    pub achieved: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

/// One salary change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryEntry {
    pub id: String,
    pub date: MonthYear,
    #[serde(default)]
    pub company: String,
    pub amount: f64,

    /// Derived: percentage change against the chronologically previous entry.
    #[serde(default)]
    pub increase_percent: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

/// One amount put aside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsEntry {
    pub id: String,
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    pub amount: f64,
    pub category: SavingsCategory,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

/// Partial replacement for an asset.
#[derive(Debug, Clone, Default)]
pub struct AssetUpdate {
    pub category: Option<AssetCategory>,
    pub name: Option<String>,
    pub value: Option<f64>,
}

impl AssetUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: AssetCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.name.is_none() && self.value.is_none()
    }
}

/// Partial replacement for a liability.
#[derive(Debug, Clone, Default)]
pub struct LiabilityUpdate {
    pub category: Option<LiabilityCategory>,
    pub value: Option<f64>,
}

impl LiabilityUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: LiabilityCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.value.is_none()
    }
}

/// Partial replacement for a milestone.
#[derive(Debug, Clone, Default)]
pub struct MilestoneUpdate {
    pub amount: Option<f64>,
    pub name: Option<String>,
}

impl MilestoneUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.name.is_none()
    }
}

/// Partial replacement for a salary entry.
#[derive(Debug, Clone, Default)]
pub struct SalaryUpdate {
    pub date: Option<MonthYear>,
    pub company: Option<String>,
    pub amount: Option<f64>,
}

impl SalaryUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: MonthYear) -> Self {
        self.date = Some(date);
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.company.is_none() && self.amount.is_none()
    }
}

/// Partial replacement for a savings entry.
#[derive(Debug, Clone, Default)]
pub struct SavingsUpdate {
    pub date: Option<NaiveDate>,
    pub amount: Option<f64>,
    pub category: Option<SavingsCategory>,
    pub notes: Option<String>,
}

impl SavingsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn category(mut self, category: SavingsCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.amount.is_none() && self.category.is_none() && self.notes.is_none()
    }
}
