//! Table rows for record listings.

use networth_core::model::{Asset, Liability, Milestone, SalaryEntry, SavingsEntry};

use crate::ui::{money, percent, short_id, truncate, Column, UiContext};

const NOTES_MAX: usize = 40;

pub const ASSET_COLUMNS: [Column; 4] = [
    Column::new("ID"),
    Column::new("Category"),
    Column::new("Name"),
    Column::numeric("Value"),
];

pub const LIABILITY_COLUMNS: [Column; 3] = [
    Column::new("ID"),
    Column::new("Category"),
    Column::numeric("Value"),
];

pub const MILESTONE_COLUMNS: [Column; 4] = [
    Column::new("ID"),
    Column::new("Name"),
    Column::numeric("Target"),
    Column::new("Achieved"),
];

pub const SALARY_COLUMNS: [Column; 5] = [
    Column::new("ID"),
    Column::new("Month"),
    Column::new("Company"),
    Column::numeric("Amount"),
    Column::numeric("Increase"),
];

pub const SAVINGS_COLUMNS: [Column; 5] = [
    Column::new("ID"),
    Column::new("Date"),
    Column::new("Category"),
    Column::numeric("Amount"),
    Column::new("Notes"),
];

fn amount(ctx: &UiContext, value: f64) -> String {
    money(value, &ctx.currency, ctx.mode.is_pretty())
}

/// Pretty mode shows short ids; plain mode keeps full ids for scripts.
fn id(ctx: &UiContext, value: &str) -> String {
    if ctx.mode.is_pretty() {
        short_id(value)
    } else {
        value.to_string()
    }
}

pub fn asset_rows(ctx: &UiContext, assets: &[Asset]) -> Vec<Vec<String>> {
    assets
        .iter()
        .map(|a| {
            vec![
                id(ctx, &a.id),
                a.category.to_string(),
                a.name.clone(),
                amount(ctx, a.value),
            ]
        })
        .collect()
}

pub fn liability_rows(ctx: &UiContext, liabilities: &[Liability]) -> Vec<Vec<String>> {
    liabilities
        .iter()
        .map(|l| vec![id(ctx, &l.id), l.category.to_string(), amount(ctx, l.value)])
        .collect()
}

pub fn milestone_rows(ctx: &UiContext, milestones: &[Milestone]) -> Vec<Vec<String>> {
    milestones
        .iter()
        .map(|m| {
            let achieved = match (m.achieved, ctx.unicode && ctx.mode.is_pretty()) {
                (true, true) => "\u{2713}".to_string(),
                (false, true) => String::new(),
                (achieved, false) => achieved.to_string(),
            };
            vec![id(ctx, &m.id), m.name.clone(), amount(ctx, m.amount), achieved]
        })
        .collect()
}

pub fn salary_rows(ctx: &UiContext, entries: &[SalaryEntry]) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|s| {
            vec![
                id(ctx, &s.id),
                s.date.to_string(),
                s.company.clone(),
                amount(ctx, s.amount),
                percent(s.increase_percent),
            ]
        })
        .collect()
}

pub fn savings_rows(ctx: &UiContext, entries: &[SavingsEntry]) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|s| {
            let notes = if ctx.mode.is_pretty() {
                truncate(&s.notes, NOTES_MAX)
            } else {
                s.notes.clone()
            };
            vec![
                id(ctx, &s.id),
                s.date.format("%Y-%m-%d").to_string(),
                s.category.to_string(),
                amount(ctx, s.amount),
                notes,
            ]
        })
        .collect()
}
