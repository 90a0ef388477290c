use keepmd_core::config::loader::ConfigLoader;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_default_profile_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
output_dir = "/tmp/keep-notes"
tag_folders = true

[logging]
level = "debug"
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.output_dir, Path::new("/tmp/keep-notes"));
    assert!(rc.tag_folders);
    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.source.as_deref(), Some(cfg_path.as_path()));
}

#[test]
fn load_with_profile_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("keepmd/config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
output_dir = "/tmp/a"

[profiles.archive]
output_dir = "/tmp/b"
tag_folders = true
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("archive")).expect("should load");
    assert_eq!(rc.active_profile, "archive");
    assert_eq!(rc.output_dir, Path::new("/tmp/b"));
    assert!(rc.tag_folders);
}

#[test]
fn profile_fields_have_defaults() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\n[profiles.default]\n");

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.output_dir, Path::new("notes"));
    assert!(!rc.tag_folders);
    assert_eq!(rc.logging.level, "info");
    assert!(rc.logging.file.is_none());
}

#[test]
fn log_file_path_is_expanded() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
[profiles.default]
output_dir = "notes"

[logging]
file = "~/keepmd.log"
file_level = "trace"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    let file = rc.logging.file.expect("log file");
    assert!(!file.to_string_lossy().starts_with('~'));
    assert!(file.ends_with("keepmd.log"));
    assert_eq!(rc.logging.file_level.as_deref(), Some("trace"));
}
