//! Years, assets, liabilities and per-year totals.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::Serialize;

use super::{milestones, FinancialLedger};
use crate::error::{LedgerError, Result};
use crate::events::LedgerChange;
use crate::model::{
    new_id, non_negative, Asset, AssetCategory, AssetUpdate, Liability, LiabilityCategory,
    LiabilityUpdate, YearRecord,
};

/// Totals and breakdowns for one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSummary {
    pub year: i32,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    pub debt_to_asset_ratio: f64,
    pub assets_by_category: BTreeMap<AssetCategory, f64>,
    pub liabilities_by_category: BTreeMap<LiabilityCategory, f64>,
}

impl FinancialLedger {
    /// All recorded years, most recent first.
    pub fn years(&self) -> Vec<i32> {
        self.state.years.keys().rev().copied().collect()
    }

    /// The most recent recorded year.
    pub fn latest_year(&self) -> Option<i32> {
        self.state.years.keys().next_back().copied()
    }

    pub fn has_year(&self, year: i32) -> bool {
        self.state.years.contains_key(&year)
    }

    /// Create an empty year. Returns false, changing nothing, if it exists.
    pub fn add_year(&mut self, year: i32) -> bool {
        self.ensure_year(year)
    }

    /// Create `year` when missing. Returns whether it was created.
    pub fn ensure_year(&mut self, year: i32) -> bool {
        let created = self.insert_year(year);
        if created {
            self.changed(LedgerChange::YearAdded(year));
        }
        created
    }

    /// Asset and liability adds create their year through this, so the
    /// only change they report is their own.
    fn insert_year(&mut self, year: i32) -> bool {
        if self.state.years.contains_key(&year) {
            return false;
        }
        self.state.years.insert(year, YearRecord::default());
        milestones::refresh(&mut self.state);
        true
    }

    /// Delete a year and everything recorded in it.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown year; `InvalidInput` when it is the only
    /// year left.
    pub fn remove_year(&mut self, year: i32) -> Result<()> {
        if !self.state.years.contains_key(&year) {
            return Err(year_not_found(year));
        }
        if self.state.years.len() == 1 {
            return Err(LedgerError::InvalidInput(format!(
                "Cannot remove {}: it is the only remaining year",
                year
            )));
        }
        self.state.years.remove(&year);
        milestones::refresh(&mut self.state);
        self.changed(LedgerChange::YearRemoved(year));
        Ok(())
    }

    /// Assets recorded for `year`; empty for an unknown year.
    pub fn assets(&self, year: i32) -> &[Asset] {
        self.state
            .years
            .get(&year)
            .map(|r| r.assets.as_slice())
            .unwrap_or(&[])
    }

    /// Liabilities recorded for `year`; empty for an unknown year.
    pub fn liabilities(&self, year: i32) -> &[Liability] {
        self.state
            .years
            .get(&year)
            .map(|r| r.liabilities.as_slice())
            .unwrap_or(&[])
    }

    pub fn add_asset(
        &mut self,
        year: i32,
        category: AssetCategory,
        name: impl Into<String>,
        value: f64,
    ) -> Result<Asset> {
        let value = non_negative("Asset value", value)?;
        let new_year = self.insert_year(year);

        let asset = Asset {
            id: new_id(),
            category,
            name: name.into(),
            value,
            last_modified: None,
        };
        self.record_mut(year)?.assets.push(asset.clone());
        milestones::refresh(&mut self.state);
        tracing::debug!(year, new_year, id = %asset.id, %category, value, "asset added");
        self.changed(LedgerChange::Assets(year));
        Ok(asset)
    }

    pub fn update_asset(&mut self, year: i32, id: &str, update: AssetUpdate) -> Result<()> {
        if let Some(value) = update.value {
            non_negative("Asset value", value)?;
        }
        let asset = self
            .record_mut(year)?
            .assets
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| record_not_found("asset", id, year))?;

        if let Some(category) = update.category {
            asset.category = category;
        }
        if let Some(name) = update.name {
            asset.name = name;
        }
        if let Some(value) = update.value {
            asset.value = value;
        }
        asset.last_modified = Some(Utc::now());

        milestones::refresh(&mut self.state);
        self.changed(LedgerChange::Assets(year));
        Ok(())
    }

    pub fn remove_asset(&mut self, year: i32, id: &str) -> Result<()> {
        let record = self.record_mut(year)?;
        let before = record.assets.len();
        record.assets.retain(|a| a.id != id);
        if record.assets.len() == before {
            return Err(record_not_found("asset", id, year));
        }
        milestones::refresh(&mut self.state);
        self.changed(LedgerChange::Assets(year));
        Ok(())
    }

    pub fn add_liability(
        &mut self,
        year: i32,
        category: LiabilityCategory,
        value: f64,
    ) -> Result<Liability> {
        let value = non_negative("Liability value", value)?;
        let new_year = self.insert_year(year);

        let liability = Liability {
            id: new_id(),
            category,
            value,
            last_modified: None,
        };
        self.record_mut(year)?.liabilities.push(liability.clone());
        milestones::refresh(&mut self.state);
        tracing::debug!(
            year,
            new_year,
            id = %liability.id,
            %category,
            value,
            "liability added"
        );
        self.changed(LedgerChange::Liabilities(year));
        Ok(liability)
    }

    pub fn update_liability(&mut self, year: i32, id: &str, update: LiabilityUpdate) -> Result<()> {
        if let Some(value) = update.value {
            non_negative("Liability value", value)?;
        }
        let liability = self
            .record_mut(year)?
            .liabilities
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| record_not_found("liability", id, year))?;

        if let Some(category) = update.category {
            liability.category = category;
        }
        if let Some(value) = update.value {
            liability.value = value;
        }
        liability.last_modified = Some(Utc::now());

        milestones::refresh(&mut self.state);
        self.changed(LedgerChange::Liabilities(year));
        Ok(())
    }

    pub fn remove_liability(&mut self, year: i32, id: &str) -> Result<()> {
        let record = self.record_mut(year)?;
        let before = record.liabilities.len();
        record.liabilities.retain(|l| l.id != id);
        if record.liabilities.len() == before {
            return Err(record_not_found("liability", id, year));
        }
        milestones::refresh(&mut self.state);
        self.changed(LedgerChange::Liabilities(year));
        Ok(())
    }

    /// Sum of asset values; 0 for an unknown year.
    pub fn total_assets(&self, year: i32) -> f64 {
        self.state
            .years
            .get(&year)
            .map(YearRecord::total_assets)
            .unwrap_or(0.0)
    }

    /// Sum of liability values; 0 for an unknown year.
    pub fn total_liabilities(&self, year: i32) -> f64 {
        self.state
            .years
            .get(&year)
            .map(YearRecord::total_liabilities)
            .unwrap_or(0.0)
    }

    /// Summed asset values per category. Categories without entries are absent.
    pub fn assets_by_category(&self, year: i32) -> BTreeMap<AssetCategory, f64> {
        let mut totals = BTreeMap::new();
        for asset in self.assets(year) {
            *totals.entry(asset.category).or_insert(0.0) += asset.value;
        }
        totals
    }

    /// Summed liability values per category. Categories without entries are absent.
    pub fn liabilities_by_category(&self, year: i32) -> BTreeMap<LiabilityCategory, f64> {
        let mut totals = BTreeMap::new();
        for liability in self.liabilities(year) {
            *totals.entry(liability.category).or_insert(0.0) += liability.value;
        }
        totals
    }

    /// Total assets minus total liabilities. May be negative.
    pub fn net_worth(&self, year: i32) -> f64 {
        self.total_assets(year) - self.total_liabilities(year)
    }

    /// Liabilities as a percentage of assets.
    ///
    /// Defined as exactly 0 when total assets are 0, whatever the liabilities.
    pub fn debt_to_asset_ratio(&self, year: i32) -> f64 {
        let assets = self.total_assets(year);
        if assets == 0.0 {
            return 0.0;
        }
        self.total_liabilities(year) / assets * 100.0
    }

    pub fn year_summary(&self, year: i32) -> YearSummary {
        YearSummary {
            year,
            total_assets: self.total_assets(year),
            total_liabilities: self.total_liabilities(year),
            net_worth: self.net_worth(year),
            debt_to_asset_ratio: self.debt_to_asset_ratio(year),
            assets_by_category: self.assets_by_category(year),
            liabilities_by_category: self.liabilities_by_category(year),
        }
    }

    fn record_mut(&mut self, year: i32) -> Result<&mut YearRecord> {
        self.state
            .years
            .get_mut(&year)
            .ok_or_else(|| year_not_found(year))
    }
}

fn year_not_found(year: i32) -> LedgerError {
    LedgerError::NotFound(format!("year {}", year))
}

fn record_not_found(kind: &str, id: &str, year: i32) -> LedgerError {
    LedgerError::NotFound(format!("{} \"{}\" in {}", kind, id, year))
}
