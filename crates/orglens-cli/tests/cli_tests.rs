//! Binary-level tests: exit codes and stream contents of `orglens`.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write fixture");
    file
}

fn orglens() -> Command {
    Command::cargo_bin("orglens").expect("binary built")
}

#[test]
fn clean_csv_exits_zero_with_report() {
    let file = csv_file(
        "Id,firstName,lastName,salary,managerId\n\
         123,Joe,Doe,60000,\n\
         124,Martin,Chekov,45000,123\n\
         125,Bob,Ronstad,47000,123\n",
    );
    orglens()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("SUMMARY"))
        .stdout(predicate::str::contains("Total employees analyzed: 3"))
        .stdout(predicate::str::contains("Total managers: 1"));
}

#[test]
fn two_ceos_exit_with_validation_code() {
    let file = csv_file(
        "Id,firstName,lastName,salary,managerId\n\
         1,First,Boss,100000,\n\
         2,Second,Boss,90000,\n",
    );
    orglens()
        .arg(file.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("[MULTIPLE_CEOS]"))
        .stderr(predicate::str::contains("validation error(s)"));
}

#[test]
fn missing_file_exits_with_invalid_input_code() {
    orglens()
        .arg("no/such/file.csv")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn malformed_csv_exits_with_read_error_code() {
    let file = csv_file(
        "Id,firstName,lastName,salary,managerId\n\
         1,Joe,Doe,sixty-thousand,\n",
    );
    orglens()
        .arg(file.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error parsing line 2"));
}

#[test]
fn json_format_emits_parsable_report() {
    let file = csv_file(
        "Id,firstName,lastName,salary,managerId\n\
         123,Joe,Doe,60000,\n\
         124,Martin,Chekov,45000,123\n",
    );
    let output = orglens()
        .arg(file.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(value["total_employees"], 2);
    assert_eq!(value["total_managers"], 1);
}

#[test]
fn threshold_override_changes_the_verdict() {
    // Joe earns 60000 over a 45000 average (1.33x): fine by default,
    // overpaid once the ceiling is pushed down to 1.25.
    let file = csv_file(
        "Id,firstName,lastName,salary,managerId\n\
         123,Joe,Doe,60000,\n\
         124,Martin,Chekov,45000,123\n",
    );
    orglens()
        .arg(file.path())
        .args(["--max-multiplier", "1.25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overpaid by:"));
}
