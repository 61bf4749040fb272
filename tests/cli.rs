use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn unity(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("unity").unwrap();
    cmd.env("UNITY_LEDGER_DATA_DIR", dir.path())
        .env_remove("UNITY_LOG");
    cmd
}

#[test]
fn init_creates_tables_and_is_repeatable() {
    let dir = TempDir::new().unwrap();

    unity(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    unity(&dir).args(["member", "add", "Aye"]).assert().success();
    unity(&dir).arg("init").assert().success();

    assert!(dir.path().join("data/members.json").exists());
    assert!(dir.path().join("data/transactions.json").exists());
    assert!(dir.path().join("data/loans.json").exists());
    assert!(dir.path().join("config.json").exists());

    unity(&dir)
        .args(["member", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aye"))
        .stdout(predicate::str::contains("1 member(s)"));
}

#[test]
fn report_totals_income_and_expense() {
    let dir = TempDir::new().unwrap();

    unity(&dir).args(["member", "add", "Aye"]).assert().success();
    unity(&dir)
        .args(["txn", "add", "Aye", "dues", "5000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income"));
    unity(&dir)
        .args(["txn", "add", "Aye", "health", "2000", "--note", "clinic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense"));

    unity(&dir)
        .args(["report", "--months", "1", "--by-category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5,000"))
        .stdout(predicate::str::contains("2,000"))
        .stdout(predicate::str::contains("3,000"))
        .stdout(predicate::str::contains("Health"));
}

#[test]
fn report_rejects_unsupported_period() {
    let dir = TempDir::new().unwrap();

    unity(&dir)
        .args(["report", "--months", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn old_transaction_only_in_longer_report() {
    let dir = TempDir::new().unwrap();
    let old = (chrono::Local::now().date_naive() - chrono::Duration::days(200))
        .format("%Y-%m-%d")
        .to_string();

    unity(&dir).args(["member", "add", "Aye"]).assert().success();
    unity(&dir)
        .args(["txn", "add", "Aye", "dues", "1000", "--date", &old])
        .assert()
        .success();

    unity(&dir)
        .args(["report", "--months", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions in this period"));

    unity(&dir)
        .args(["report", "--months", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1,000"));
}

#[test]
fn transaction_for_unknown_member_fails() {
    let dir = TempDir::new().unwrap();

    unity(&dir)
        .args(["txn", "add", "Nobody", "dues", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Member not found: Nobody"));

    let transactions = fs::read_to_string(dir.path().join("data/transactions.json")).unwrap();
    assert!(!transactions.contains("dues"));
}

#[test]
fn unknown_category_lists_valid_ones() {
    let dir = TempDir::new().unwrap();

    unity(&dir).args(["member", "add", "Aye"]).assert().success();
    unity(&dir)
        .args(["txn", "add", "Aye", "rent", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("general-expense"));
}

#[test]
fn member_import_skips_nameless_rows() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("members.csv");
    fs::write(&csv_path, "name,phone\nAye,09-111\n,09-222\nMya,\n").unwrap();

    unity(&dir)
        .args(["member", "import"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 member(s)"))
        .stdout(predicate::str::contains("Skipped 1 row(s)"));
}

#[test]
fn loans_are_listed_per_member() {
    let dir = TempDir::new().unwrap();

    unity(&dir).args(["member", "add", "Aye"]).assert().success();
    unity(&dir).args(["member", "add", "Mya"]).assert().success();
    unity(&dir)
        .args(["loan", "add", "Aye", "200000", "--rate", "2"])
        .assert()
        .success();
    unity(&dir)
        .args(["loan", "add", "Mya", "50000"])
        .assert()
        .success();

    unity(&dir)
        .args(["loan", "list", "--member", "Aye"])
        .assert()
        .success()
        .stdout(predicate::str::contains("200,000.00"))
        .stdout(predicate::str::contains("Mya").not());
}

#[test]
fn export_json_to_stdout() {
    let dir = TempDir::new().unwrap();

    unity(&dir).args(["member", "add", "Aye"]).assert().success();
    unity(&dir)
        .args(["txn", "add", "Aye", "donation", "750.50"])
        .assert()
        .success();

    unity(&dir)
        .args(["export", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\""))
        .stdout(predicate::str::contains("\"category\": \"donation\""));
}

#[test]
fn report_csv_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.csv");

    unity(&dir).args(["member", "add", "Aye"]).assert().success();
    unity(&dir)
        .args(["txn", "add", "Aye", "dues", "5000"])
        .assert()
        .success();

    unity(&dir)
        .args(["report", "--output"])
        .arg(&out)
        .assert()
        .success();

    let contents = fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("Date,Member,Category,Type,Amount,Note"));
    assert!(contents.contains(",,BALANCE,,5000.00,"));
}

#[test]
fn export_csv_tables() {
    let dir = TempDir::new().unwrap();

    unity(&dir)
        .args(["member", "add", "Aye", "--phone", "09-111"])
        .assert()
        .success();
    unity(&dir)
        .args(["loan", "add", "Aye", "200000", "--rate", "2"])
        .assert()
        .success();

    unity(&dir)
        .args(["export", "csv", "--table", "members"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ID,Name,Phone,Created"))
        .stdout(predicate::str::contains("Aye,09-111"));

    unity(&dir)
        .args(["export", "csv", "--table", "loans"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ID,Date,Member,Principal,Rate,Status,Note"))
        .stdout(predicate::str::contains("Aye,200000.00,2"));

    unity(&dir)
        .args(["export", "json", "--table", "loans"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--table only applies to csv exports"));
}

#[test]
fn exported_ledger_passes_check() {
    let dir = TempDir::new().unwrap();
    let json_out = dir.path().join("ledger.json");
    let yaml_out = dir.path().join("ledger.yaml");

    unity(&dir).args(["member", "add", "Aye"]).assert().success();
    unity(&dir)
        .args(["txn", "add", "Aye", "dues", "5000"])
        .assert()
        .success();

    unity(&dir)
        .args(["export", "json", "--output"])
        .arg(&json_out)
        .assert()
        .success();
    unity(&dir)
        .args(["export", "yaml", "--output"])
        .arg(&yaml_out)
        .assert()
        .success();

    for file in [&json_out, &yaml_out] {
        unity(&dir)
            .arg("check")
            .arg(file)
            .assert()
            .success()
            .stdout(predicate::str::contains("Export OK"))
            .stdout(predicate::str::contains("Members:        1"))
            .stdout(predicate::str::contains("Transactions:   1"));
    }
}

#[test]
fn check_rejects_tampered_export() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("ledger.json");

    unity(&dir).args(["member", "add", "Aye"]).assert().success();
    unity(&dir)
        .args(["export", "json", "--output"])
        .arg(&out)
        .assert()
        .success();

    let contents = fs::read_to_string(&out).unwrap();
    fs::write(&out, contents.replace("\"1.0.0\"", "\"9.9.9\"")).unwrap();

    unity(&dir)
        .arg("check")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Schema version mismatch"));

    fs::write(&out, "{not json").unwrap();
    unity(&dir)
        .arg("check")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import error"));
}
