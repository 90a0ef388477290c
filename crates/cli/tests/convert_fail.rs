use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn convert_rejects_missing_input_path() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("keepmd"));
    cmd.current_dir(tmp.path());
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["convert", "-i", "does/not/exist"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL keepmd convert"))
        .stdout(predicate::str::contains("Please enter a correct path!"));

    assert!(!tmp.path().join("notes").exists());
}

#[test]
fn convert_requires_input_flag() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("keepmd"));
    cmd.arg("convert");
    cmd.assert().failure().stderr(predicate::str::contains("--input"));
}

#[test]
fn malformed_note_is_skipped_and_run_fails() {
    let tmp = tempdir().unwrap();
    let takeout = tmp.path().join("Keep");
    fs::create_dir_all(&takeout).unwrap();
    fs::write(takeout.join("good.json"), r#"{"title": "Good", "userEditedTimestampUsec": 0}"#)
        .unwrap();
    fs::write(takeout.join("bad.json"), r#"{"textContent": "orphan"}"#).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("keepmd"));
    cmd.current_dir(tmp.path());
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["convert", "-i", takeout.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("PART keepmd convert"))
        .stdout(predicate::str::contains("Notes skipped:        1"))
        .stdout(predicate::str::contains("bad.json"));

    assert!(tmp.path().join("notes/Good.md").is_file());
}
