//! Financial data model.

mod category;
mod dates;
mod types;
mod validate;

pub use category::{AssetCategory, LiabilityCategory, SavingsCategory};
pub use dates::{calendar_date, parse_date, MonthYear};
pub use types::{
    new_id, Asset, AssetUpdate, Liability, LiabilityUpdate, Milestone, MilestoneUpdate,
    SalaryEntry, SalaryUpdate, SavingsEntry, SavingsUpdate, YearRecord,
};
pub use validate::{non_negative, positive};
