use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_networth"))
}

/// A scratch home with its own XDG config and data directories.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        std::fs::create_dir_all(dir.path().join("c")).expect("create config dir");
        std::fs::create_dir_all(dir.path().join("d")).expect("create data dir");
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn config_file(&self) -> PathBuf {
        self.path("c").join("networth").join("config.toml")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.args(args)
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.path("c"))
            .env("XDG_DATA_HOME", self.path("d"))
            .env_remove("NETWORTH_PATH")
            .env_remove("NETWORTH_CONFIG")
            .env_remove("NETWORTH_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("run networth")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "{:?} failed: stdout={}, stderr={}",
            args,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    fn json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_ok(args);
        serde_json::from_str(&stdout).expect("stdout should be JSON")
    }
}

fn init_at(sandbox: &Sandbox, ledger: &Path, year: &str) {
    let ledger = ledger.to_string_lossy().to_string();
    sandbox.run_ok(&["init", &ledger, "--year", year]);
}

#[test]
fn test_cli_init_writes_config_and_ledger() {
    let sandbox = Sandbox::new();
    let ledger = sandbox.path("networth.json");
    init_at(&sandbox, &ledger, "2023");

    assert!(ledger.exists());
    let config = std::fs::read_to_string(sandbox.config_file()).expect("config written");
    assert!(config.contains(&*ledger.to_string_lossy()));

    let years = sandbox.json(&["year", "list", "--json"]);
    assert_eq!(years, serde_json::json!([2023]));
}

#[test]
fn test_cli_records_and_summary() {
    let sandbox = Sandbox::new();
    let ledger = sandbox.path("networth.json");
    init_at(&sandbox, &ledger, "2023");

    let added = sandbox.run_ok(&["asset", "add", "investments", "Index fund", "12000"]);
    assert!(added.starts_with("status=ok"));
    sandbox.run_ok(&["asset", "add", "cash-and-cash-equivalent", "Current account", "3000"]);
    sandbox.run_ok(&["liability", "add", "student-loans", "5000", "--year", "2023"]);

    let summary = sandbox.json(&["summary", "--json"]);
    assert_eq!(summary["year"], 2023);
    assert_eq!(summary["totalAssets"], 15000.0);
    assert_eq!(summary["totalLiabilities"], 5000.0);
    assert_eq!(summary["netWorth"], 10000.0);
    assert_eq!(summary["assetsByCategory"]["Investments"], 12000.0);

    // The starter milestone is 10,000 and net worth has reached it.
    let milestones = sandbox.json(&["milestone", "list", "--json"]);
    assert_eq!(milestones[0]["achieved"], true);

    let fund = sandbox.json(&["emergency-fund", "show", "--monthly-expenses", "1000", "--json"]);
    assert_eq!(fund["current"], 3000.0);
    assert_eq!(fund["goalMet"], true);
}

#[test]
fn test_cli_edit_by_id_prefix() {
    let sandbox = Sandbox::new();
    let ledger = sandbox.path("networth.json");
    init_at(&sandbox, &ledger, "2024");
    sandbox.run_ok(&["asset", "add", "investments", "Fund", "100"]);

    let assets = sandbox.json(&["asset", "list", "--json"]);
    let id = assets[0]["id"].as_str().expect("asset id").to_string();
    sandbox.run_ok(&["asset", "edit", &id[..8], "--value", "250"]);

    let assets = sandbox.json(&["asset", "list", "--json"]);
    assert_eq!(assets[0]["value"], 250.0);
    assert_eq!(assets[0]["name"], "Fund");
}

#[test]
fn test_cli_history_and_benchmark() {
    let sandbox = Sandbox::new();
    let ledger = sandbox.path("networth.json");
    init_at(&sandbox, &ledger, "2022");
    sandbox.run_ok(&["asset", "add", "investments", "Fund", "1000", "--year", "2022"]);
    sandbox.run_ok(&["asset", "add", "investments", "Fund", "1500", "--year", "2023"]);

    let report = sandbox.json(&["history", "--json"]);
    assert_eq!(report["history"].as_array().map(Vec::len), Some(2));
    assert_eq!(report["growth"][0]["growth"], 50.0);

    let benchmark = sandbox.json(&["benchmark", "--low-rate", "0.05", "--json"]);
    assert_eq!(benchmark["years"], serde_json::json!([2022, 2023]));
    assert_eq!(benchmark["actual"], serde_json::json!([1000.0, 1500.0]));
    assert_eq!(benchmark["low"][1], 1050.0);
    assert_eq!(benchmark["high"][1], 1100.0);
}

#[test]
fn test_cli_salary_and_savings() {
    let sandbox = Sandbox::new();
    let ledger = sandbox.path("networth.json");
    init_at(&sandbox, &ledger, "2024");

    sandbox.run_ok(&["salary", "add", "2023-01", "Acme", "40000"]);
    sandbox.run_ok(&["salary", "add", "2024-01", "Acme", "44000"]);
    let salary = sandbox.json(&["salary", "list", "--json"]);
    assert_eq!(salary[0]["amount"], 44000.0);
    let increase = salary[0]["increasePercent"].as_f64().expect("increase");
    assert!((increase - 10.0).abs() < 1e-9);

    let chart = sandbox.json(&["salary", "chart", "--json"]);
    assert_eq!(chart["labels"], serde_json::json!(["1/2023", "1/2024"]));

    sandbox.run_ok(&["savings", "add", "2024-03-01", "200", "--category", "retirement"]);
    let savings = sandbox.json(&["savings", "list", "--json"]);
    assert_eq!(savings[0]["category"], "Retirement");
    assert_eq!(savings[0]["date"], "2024-03-01");
}

#[test]
fn test_cli_export_then_import() {
    let sandbox = Sandbox::new();
    let ledger = sandbox.path("networth.json");
    let backup = sandbox.path("backup.json");
    init_at(&sandbox, &ledger, "2023");
    sandbox.run_ok(&["asset", "add", "properties", "Flat", "200000"]);

    let backup_arg = backup.to_string_lossy().to_string();
    sandbox.run_ok(&["export", "-o", &backup_arg]);
    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&backup).expect("export written"))
            .expect("export is JSON");
    assert!(exported["years"]["2023"]["assets"].is_array());

    sandbox.run_ok(&["year", "add", "2024"]);
    sandbox.run_ok(&["import", &backup_arg, "--yes"]);

    let years = sandbox.json(&["year", "list", "--json"]);
    assert_eq!(years, serde_json::json!([2023]));
    let assets = sandbox.json(&["asset", "list", "--json"]);
    assert_eq!(assets[0]["name"], "Flat");
}

#[test]
fn test_cli_backup_copies_file() {
    let sandbox = Sandbox::new();
    let ledger = sandbox.path("networth.json");
    init_at(&sandbox, &ledger, "2023");

    let copy = sandbox.path("copies").join("networth.json");
    sandbox.run_ok(&["backup", &copy.to_string_lossy()]);
    assert_eq!(
        std::fs::read(&copy).expect("backup written"),
        std::fs::read(&ledger).expect("ledger readable")
    );
}

#[test]
fn test_cli_missing_config_exits_not_found() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["summary"]);
    assert_eq!(output.status.code(), Some(3));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error=No config found"));
    assert!(stderr.contains("networth init"));
}

#[test]
fn test_cli_missing_ledger_exits_not_found() {
    let sandbox = Sandbox::new();
    let missing = sandbox.path("absent.json");
    let output = sandbox.run(&["summary", "--ledger", &missing.to_string_lossy()]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No ledger found"));
}

#[test]
fn test_cli_invalid_input_exit_code() {
    let sandbox = Sandbox::new();
    let ledger = sandbox.path("networth.json");
    init_at(&sandbox, &ledger, "2024");

    let negative = sandbox.run(&["asset", "add", "investments", "Fund", "-5"]);
    assert_eq!(negative.status.code(), Some(4));

    let unknown = sandbox.run(&["liability", "add", "crypto", "10"]);
    assert_eq!(unknown.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&unknown.stderr).contains("Credit Card Debt"));

    let again = sandbox.run(&["init", &ledger.to_string_lossy()]);
    assert_eq!(again.status.code(), Some(4));

    let removed = sandbox.run(&["milestone", "remove", "no-such-id"]);
    assert_eq!(removed.status.code(), Some(3));
}

#[test]
fn test_cli_unreadable_ledger_is_kept_before_saving() {
    let sandbox = Sandbox::new();
    let ledger = sandbox.path("networth.json");
    init_at(&sandbox, &ledger, "2024");
    sandbox.run_ok(&["asset", "add", "investments", "Index fund", "12000"]);

    let full = std::fs::read_to_string(&ledger).expect("ledger readable");
    let truncated = &full[..full.len() / 2];
    std::fs::write(&ledger, truncated).expect("truncate ledger");

    let output = sandbox.run(&["salary", "add", "2024-01", "Acme", "40000"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);

    let kept: Vec<PathBuf> = std::fs::read_dir(sandbox.path(""))
        .expect("sandbox listable")
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with("networth.json.corrupt-"))
        })
        .collect();
    assert_eq!(kept.len(), 1, "stderr={stderr}");
    assert_eq!(
        std::fs::read_to_string(&kept[0]).expect("kept file readable"),
        truncated
    );
    assert!(stderr.contains("warning="));
    assert!(stderr.contains(&*kept[0].to_string_lossy()));

    // The next run reads the fresh ledger without moving anything again.
    let salary = sandbox.json(&["salary", "list", "--json"]);
    assert_eq!(salary.as_array().map(Vec::len), Some(1));
    sandbox.run_ok(&["year", "add", "2030"]);
    let still_one = std::fs::read_dir(sandbox.path(""))
        .expect("sandbox listable")
        .filter_map(|entry| entry.ok())
        .filter(|e| e.file_name().to_string_lossy().contains(".corrupt-"))
        .count();
    assert_eq!(still_one, 1);
}

#[test]
fn test_cli_logs_on_a_pipe_are_plain_text() {
    let sandbox = Sandbox::new();
    let ledger = sandbox.path("networth.json");
    init_at(&sandbox, &ledger, "2024");

    let output = sandbox
        .command(&["year", "list"])
        .env_remove("NO_COLOR")
        .env("NETWORTH_LOG", "debug")
        .output()
        .expect("run networth");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.is_empty(), "debug logging should write to stderr");
    assert!(!stderr.contains('\x1b'), "stderr={stderr:?}");
}

