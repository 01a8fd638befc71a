use std::fs;

use networth_core::model::AssetCategory;
use networth_core::{FinancialLedger, JsonFileStore, StateStore};

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let mut store = JsonFileStore::new(dir.path().join("nested").join("ledger.json"));

    let mut ledger = FinancialLedger::starting_in(2024);
    ledger
        .add_asset(2024, AssetCategory::RetirementSavings, "Pension", 42_000.0)
        .expect("add asset should succeed");
    ledger.save(&mut store).expect("save should succeed");
    assert!(store.exists());

    let restored = FinancialLedger::load(&store).expect("load should succeed");
    assert_eq!(restored.state(), ledger.state());
}

#[test]
fn test_missing_file_starts_fresh() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let store = JsonFileStore::new(dir.path().join("absent.json"));

    assert!(store.load().expect("load should succeed").is_none());
    let ledger = FinancialLedger::load(&store).expect("load should succeed");
    assert_eq!(ledger.years().len(), 1);
    assert_eq!(ledger.milestones().len(), 1);
}

#[test]
fn test_corrupt_file_starts_fresh() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("ledger.json");
    fs::write(&path, "{\"years\": 12").expect("write should succeed");

    let ledger = FinancialLedger::load(&JsonFileStore::new(&path)).expect("load should succeed");
    assert!(ledger.assets(ledger.latest_year().unwrap_or_default()).is_empty());
}

#[test]
fn test_saved_document_uses_backup_field_names() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("ledger.json");
    let mut store = JsonFileStore::new(&path);

    FinancialLedger::starting_in(2024)
        .save(&mut store)
        .expect("save should succeed");

    let text = fs::read_to_string(&path).expect("read should succeed");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert!(value["years"]["2024"].is_object());
    assert!(value["milestones"].is_array());
    assert!(value["salaryHistory"].is_array());
    assert!(value["savingsHistory"].is_array());
    assert_eq!(value["emergencyFundGoal"], 3.0);
}
