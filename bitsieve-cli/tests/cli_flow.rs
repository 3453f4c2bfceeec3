use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli_cmd() -> Command {
    Command::cargo_bin("bitsieve").expect("bitsieve binary")
}

#[test]
fn demo_passes() {
    cli_cmd()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("<BloomFilter size: 15>: 5 of 15 bits set"))
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn probe_default_geometry() {
    cli_cmd()
        .args(["probe", "--add", "hello,world", "--check", "hello,hello world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello\tpossibly present"))
        .stdout(predicate::str::contains("hello world\tabsent"));
}

#[test]
fn probe_json_report() {
    let output = cli_cmd()
        .args(["probe", "--bits", "15", "--hashes", "3", "--add", "hello", "--check", "hello", "--json"])
        .output()
        .expect("run probe");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(report["config"]["num_bits"], 15);
    assert_eq!(report["config"]["num_hashes"], 3);
    assert_eq!(report["bits_set"], 3);
    assert_eq!(report["results"][0]["element"], "hello");
    assert_eq!(report["results"][0]["present"], true);
}

#[test]
fn probe_with_config_file() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("filter.json");
    fs::write(&path, r#"{"num_bits": 1, "num_hashes": 1}"#).expect("write config");

    cli_cmd()
        .args(["probe", "--config", path.to_str().unwrap(), "--add", "x", "--check", "never-added"])
        .assert()
        .success()
        .stdout(predicate::str::contains("never-added\tpossibly present"));
}

#[test]
fn probe_rejects_zero_bits() {
    cli_cmd()
        .args(["probe", "--bits", "0", "--add", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("num_bits must be at least 1"));
}

#[test]
fn suggest_geometry() {
    cli_cmd()
        .args(["suggest", "--capacity", "1000", "--fp-rate", "0.01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"num_bits\": 9586"))
        .stdout(predicate::str::contains("\"num_hashes\": 7"));
}
