use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_LEDGER_DIR", data_dir)
        .env_remove("EXPENSE_LEDGER_FILE");
    cmd
}

#[test]
fn exit_from_menu_creates_header_only_ledger() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal Expense Tracker"))
        .stdout(predicate::str::ends_with("Goodbye!\n"));

    let content = fs::read_to_string(temp_dir.path().join("expenses.csv")).unwrap();
    assert_eq!(content, "Date,Category,Amount,Description\n");
}

#[test]
fn add_view_and_total_session() {
    let temp_dir = TempDir::new().unwrap();
    let input = "1\n2026-03-01\n1\n10\nLunch\n\
                 1\n2026-03-02\n2\nabc\nBus\n\
                 1\n2026-03-03\n3\n5.5\nWater\n\
                 2\n\n3\n\n6\n";

    expenses(temp_dir.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("3. 2026-03-03\tBills\t5.5\tWater"))
        .stdout(predicate::str::contains("Total Expenses: 15.5"));
}

#[test]
fn delete_header_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = temp_dir.path().join("expenses.csv");
    fs::write(
        &ledger,
        "Date,Category,Amount,Description\n2026-01-01,Food,3,Tea\n",
    )
    .unwrap();

    expenses(temp_dir.path())
        .write_stdin("4\n0\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You cannot delete the header row!"));

    assert_eq!(
        fs::read_to_string(&ledger).unwrap(),
        "Date,Category,Amount,Description\n2026-01-01,Food,3,Tea\n"
    );
}

#[test]
fn edit_go_back_leaves_file_byte_for_byte() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = temp_dir.path().join("expenses.csv");
    let original = "Date,Category,Amount,Description\r\n2026-01-01,Food,3,Tea\r\n";
    fs::write(&ledger, original).unwrap();

    expenses(temp_dir.path())
        .write_stdin("5\n1\nb\n6\n")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&ledger).unwrap(), original);
}

#[test]
fn file_flag_overrides_ledger_path() {
    let temp_dir = TempDir::new().unwrap();
    let custom = temp_dir.path().join("custom").join("mine.csv");

    expenses(temp_dir.path())
        .arg("--file")
        .arg(&custom)
        .write_stdin("1\n2026-05-05\n4\n20\nShoes\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"));

    let content = fs::read_to_string(&custom).unwrap();
    assert!(content.ends_with("2026-05-05,Shopping,20,Shoes\n"));
    assert!(!temp_dir.path().join("expenses.csv").exists());
}

#[test]
fn changes_show_up_in_log_command() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .write_stdin("1\n2026-05-05\n1\n8\nPizza\n4\n1\n6\n")
        .assert()
        .success();

    expenses(temp_dir.path())
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE #1 (Pizza)"))
        .stdout(predicate::str::contains("DELETE #1 (Pizza)"));
}

#[test]
fn no_audit_flag_skips_log() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .arg("--no-audit")
        .write_stdin("1\n2026-05-05\n1\n8\nPizza\n6\n")
        .assert()
        .success();

    assert!(!temp_dir.path().join("audit.log").exists());
}

#[test]
fn init_and_config_commands() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created ledger at:"));

    assert!(temp_dir.path().join("config.json").exists());
    assert!(temp_dir.path().join("expenses.csv").exists());

    expenses(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Date format:   %Y-%m-%d"));
}
