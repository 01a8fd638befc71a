use chrono::NaiveDate;

use networth_core::analytics::growth_percentage;
use networth_core::model::{AssetCategory, LiabilityCategory, MonthYear, SavingsCategory};
use networth_core::{FinancialLedger, LedgerChange};

fn populated_ledger() -> FinancialLedger {
    let mut ledger = FinancialLedger::starting_in(2022);
    ledger
        .add_asset(2022, AssetCategory::Investments, "Index fund", 8_000.0)
        .expect("add asset should succeed");
    ledger
        .add_liability(2022, LiabilityCategory::StudentLoans, 12_000.0)
        .expect("add liability should succeed");
    ledger
        .add_asset(2023, AssetCategory::CashAndCashEquivalent, "Current account", 3_500.0)
        .expect("add asset should succeed");
    ledger
        .add_asset(2023, AssetCategory::Investments, "Index fund", 11_000.0)
        .expect("add asset should succeed");
    ledger
        .add_liability(2023, LiabilityCategory::StudentLoans, 9_000.0)
        .expect("add liability should succeed");
    ledger
        .add_liability(2024, LiabilityCategory::CreditCardDebt, 400.0)
        .expect("add liability should succeed");
    ledger
        .add_milestone(25_000.0, "25K")
        .expect("add milestone should succeed");
    ledger
        .add_salary_entry(MonthYear::new(2023, 1).unwrap(), "Acme", 40_000.0)
        .expect("add salary should succeed");
    ledger
        .add_salary_entry(MonthYear::new(2024, 1).unwrap(), "Acme", 44_000.0)
        .expect("add salary should succeed");
    ledger
        .add_savings_entry(
            NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
            250.0,
            SavingsCategory::EmergencyFund,
            "April",
        )
        .expect("add savings should succeed");
    ledger
        .set_emergency_fund_goal(4.5)
        .expect("set goal should succeed");
    ledger
}

#[test]
fn test_totals_agree_for_every_year() {
    let ledger = populated_ledger();
    for year in ledger.years() {
        let assets = ledger.total_assets(year);
        let liabilities = ledger.total_liabilities(year);
        assert_eq!(ledger.net_worth(year), assets - liabilities);

        let by_category: f64 = ledger.assets_by_category(year).values().sum();
        assert!((by_category - assets).abs() < 1e-9);

        if assets == 0.0 {
            assert_eq!(ledger.debt_to_asset_ratio(year), 0.0);
        }
    }
    assert_eq!(ledger.total_assets(1999), 0.0);
    assert_eq!(ledger.debt_to_asset_ratio(2024), 0.0);
}

#[test]
fn test_history_and_year_ordering() {
    let ledger = populated_ledger();

    let years = ledger.years();
    assert!(years.windows(2).all(|w| w[0] > w[1]));

    let history = ledger.net_worth_history();
    assert!(history.windows(2).all(|w| w[0].year < w[1].year));
    assert_eq!(history, ledger.net_worth_history());
}

#[test]
fn test_growth_sign_change_rules() {
    assert_eq!(growth_percentage(-100.0, 50.0), 100.0);
    assert_eq!(growth_percentage(-200.0, -50.0), 75.0);

    let ledger = populated_ledger();
    let growth = ledger.growth_percentages();
    assert_eq!(growth.len(), 2);
    // -4000 -> 5500 crosses zero, 5500 -> -400 drops.
    assert_eq!(growth[0].growth, 100.0);
    assert_eq!(growth[1].growth, -107.27);
}

#[test]
fn test_add_existing_year_keeps_data() {
    let mut ledger = populated_ledger();
    let before = ledger.assets(2023).to_vec();

    assert!(!ledger.add_year(2023));
    assert_eq!(ledger.assets(2023), before.as_slice());
}

#[test]
fn test_export_import_round_trip() {
    let ledger = populated_ledger();
    let exported = ledger.export_json().expect("export should succeed");

    let mut restored = FinancialLedger::starting_in(1990);
    restored
        .import_json(&exported)
        .expect("import should succeed");

    assert_eq!(restored.state(), ledger.state());
    assert_eq!(restored.emergency_fund_goal(), 4.5);
    assert_eq!(
        restored.export_json().expect("export should succeed"),
        exported
    );
}

#[test]
fn test_import_notifies_replacement() {
    let exported = populated_ledger()
        .export_json()
        .expect("export should succeed");

    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let mut ledger = FinancialLedger::starting_in(2024);
    let sink = std::rc::Rc::clone(&seen);
    ledger.subscribe(move |change| sink.borrow_mut().push(*change));

    ledger.import_json(&exported).expect("import should succeed");
    assert!(ledger.import_json("[]").is_err());

    assert_eq!(*seen.borrow(), vec![LedgerChange::Replaced]);
}

#[test]
fn test_unsubscribed_observer_stops_hearing_changes() {
    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let mut ledger = FinancialLedger::starting_in(2024);
    let sink = std::rc::Rc::clone(&seen);
    let id = ledger.subscribe(move |change| sink.borrow_mut().push(*change));

    assert!(ledger.add_year(2025));
    assert!(ledger.unsubscribe(id));
    assert!(!ledger.unsubscribe(id));
    assert!(ledger.add_year(2026));

    assert_eq!(*seen.borrow(), vec![LedgerChange::YearAdded(2025)]);
}

#[test]
fn test_status_refresh_is_quiet_when_nothing_flips() {
    let seen = std::rc::Rc::new(std::cell::RefCell::new(0));
    let mut ledger = populated_ledger();
    let sink = std::rc::Rc::clone(&seen);
    ledger.subscribe(move |_| *sink.borrow_mut() += 1);

    ledger.update_milestone_status();
    assert_eq!(*seen.borrow(), 0);
}

#[test]
fn test_export_import_keeps_every_float_bit() {
    let mut values = vec![394_301.338_356_336_75, 0.1 + 0.2, 1.0 / 3.0, 2.0_f64.sqrt() * 1e6];
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..200 {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        values.push((seed >> 11) as f64 / (1u64 << 53) as f64 * 1_000_000.0);
    }

    let mut ledger = FinancialLedger::starting_in(2024);
    for (i, value) in values.iter().enumerate() {
        ledger
            .add_asset(2024, AssetCategory::Investments, format!("Fund {i}"), *value)
            .expect("add asset should succeed");
    }
    ledger
        .add_milestone(values[0], "Odd target")
        .expect("add milestone should succeed");

    let exported = ledger.export_json().expect("export should succeed");
    let mut restored = FinancialLedger::starting_in(2000);
    restored.import_json(&exported).expect("import should succeed");

    assert_eq!(restored.state(), ledger.state());
    for (asset, value) in restored.assets(2024).iter().zip(&values) {
        assert_eq!(asset.value.to_bits(), value.to_bits(), "{}", asset.name);
    }
    assert_eq!(restored.export_json().expect("export should succeed"), exported);
}

#[test]
fn test_adding_into_a_new_year_reports_one_change() {
    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let mut ledger = FinancialLedger::starting_in(2024);
    let sink = std::rc::Rc::clone(&seen);
    ledger.subscribe(move |change| sink.borrow_mut().push(*change));

    ledger
        .add_asset(2025, AssetCategory::Investments, "Fund", 100.0)
        .expect("add asset should succeed");
    ledger
        .add_liability(2026, LiabilityCategory::CreditCardDebt, 50.0)
        .expect("add liability should succeed");
    assert!(ledger.has_year(2025) && ledger.has_year(2026));

    assert!(ledger.ensure_year(2027));
    assert!(!ledger.ensure_year(2027));

    assert_eq!(
        *seen.borrow(),
        vec![
            LedgerChange::Assets(2025),
            LedgerChange::Liabilities(2026),
            LedgerChange::YearAdded(2027),
        ]
    );
}
