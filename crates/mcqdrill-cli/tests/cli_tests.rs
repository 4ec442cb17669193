//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mcqdrill() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("mcqdrill").unwrap()
}

const SAMPLE_BANK: &str = "\
id|question|option1|option2|option3|option4|answer|tags
q1|What is 2+2?|3|4|5|6|4|arithmetic
q2|Capital of France?|Paris|London|Rome|Berlin|Paris|geography
short|row
q3|Largest planet?|Jupiter|Mars|||Jupiter|astronomy
";

/// Write a config whose data dir lives inside the temp dir.
fn write_config(dir: &TempDir) -> std::path::PathBuf {
    let config_path = dir.path().join("mcqdrill.toml");
    let data_dir = dir.path().join("data");
    std::fs::write(
        &config_path,
        format!("data_dir = {:?}\n", data_dir.to_string_lossy()),
    )
    .unwrap();
    config_path
}

#[test]
fn import_reports_accepted_and_skipped_counts() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);
    let bank_path = dir.path().join("bank.txt");
    std::fs::write(&bank_path, SAMPLE_BANK).unwrap();

    mcqdrill()
        .arg("--config")
        .arg(&config)
        .arg("import")
        .arg(&bank_path)
        .arg("--subject")
        .arg("General")
        .arg("--chapter")
        .arg("One")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3 questions"))
        .stdout(predicate::str::contains("1 skipped"))
        .stdout(predicate::str::contains("Skipped line 4"));
}

#[test]
fn import_nonexistent_file_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    mcqdrill()
        .arg("--config")
        .arg(&config)
        .arg("import")
        .arg("no_such_bank.txt")
        .arg("--subject")
        .arg("S")
        .arg("--chapter")
        .arg("C")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn import_bank_without_data_rows_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);
    let bank_path = dir.path().join("empty.txt");
    std::fs::write(&bank_path, "just a header\n").unwrap();

    mcqdrill()
        .arg("--config")
        .arg(&config)
        .arg("import")
        .arg(&bank_path)
        .arg("--subject")
        .arg("S")
        .arg("--chapter")
        .arg("C")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed input"));
}

#[test]
fn history_is_empty_before_any_test() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    mcqdrill()
        .arg("--config")
        .arg(&config)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No past results"));
}

#[test]
fn history_delete_out_of_range_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    mcqdrill()
        .arg("--config")
        .arg(&config)
        .arg("history")
        .arg("delete")
        .arg("3")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing deleted"));
}

#[test]
fn export_without_history_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    mcqdrill()
        .arg("--config")
        .arg(&config)
        .arg("export")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no result at history index"));
}

#[test]
fn take_without_bank_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    mcqdrill()
        .arg("--config")
        .arg(&config)
        .arg("take")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no question bank imported"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    mcqdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created mcqdrill.toml"));

    assert!(dir.path().join("mcqdrill.toml").exists());
}

#[test]
fn init_skips_existing_config() {
    let dir = TempDir::new().unwrap();

    mcqdrill().current_dir(dir.path()).arg("init").assert().success();
    mcqdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    mcqdrill()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("multiple-choice quiz"));
}

#[test]
fn version_output() {
    mcqdrill()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mcqdrill"));
}
