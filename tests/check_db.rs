use assert_cmd::Command;
use predicates::prelude::*;
use rusqlite::Connection;
use std::path::Path;
use tempfile::TempDir;

fn check_db(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("check_db").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn seed(dir: &Path) {
    let conn = Connection::open(dir.join("water_me.db")).unwrap();
    conn.execute_batch(
        "CREATE TABLE plants (id INTEGER PRIMARY KEY, name TEXT);
         CREATE TABLE logs (id INTEGER PRIMARY KEY, plant_id INTEGER);
         INSERT INTO plants (name) VALUES ('fern'), ('basil'), ('aloe');",
    )
    .unwrap();
}

#[test]
fn test_reports_counts_and_missing_table() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());

    check_db(temp_dir.path())
        .assert()
        .success()
        .stdout("TABLE plants: 3\nTABLE logs: 0\nTABLE notes: no such table: notes\n");
}

#[test]
fn test_output_is_stable_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());

    let first = check_db(temp_dir.path()).output().unwrap();
    let second = check_db(temp_dir.path()).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
    assert!(first.status.success());
}

#[test]
fn test_unopenable_database_prints_single_error() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("water_me.db")).unwrap();

    let output = check_db(temp_dir.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("ERROR unable to open database"));
}

#[test]
fn test_non_database_file_reports_per_table() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("water_me.db"),
        "plain text, not a database\n".repeat(64),
    )
    .unwrap();

    check_db(temp_dir.path()).assert().success().stdout(
        "TABLE plants: file is not a database\n\
         TABLE logs: file is not a database\n\
         TABLE notes: file is not a database\n",
    );
}

#[test]
fn test_fresh_database_reports_all_missing() {
    let temp_dir = TempDir::new().unwrap();

    check_db(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("TABLE plants: no such table: plants"))
        .stdout(predicate::str::contains("TABLE notes: no such table: notes"));
}

#[test]
fn test_json_report() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());

    let output = check_db(temp_dir.path())
        .args(["--json", "--table", "plants", "--table", "notes"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["tables"][0]["table"], "plants");
    assert_eq!(report["tables"][0]["count"], 3);
    assert_eq!(report["tables"][1]["error"], "no such table: notes");
}
