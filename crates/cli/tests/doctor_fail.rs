use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn doctor_fails_when_explicit_config_missing() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope.toml");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("keepmd"));
    cmd.args(["doctor", "--config", missing.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL keepmd doctor"))
        .stdout(predicate::str::contains("config file not found"));
}

#[test]
fn doctor_fails_on_unknown_profile() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, "version = 1\n[profiles.default]\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("keepmd"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap(), "--profile", "work"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL keepmd doctor"))
        .stdout(predicate::str::contains("profile 'work' not found"));
}
