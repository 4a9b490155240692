//! `nrt init` scaffolding behavior.

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

use narrative::MarkerRegistry;

fn nrt() -> Command {
    Command::cargo_bin("nrt").expect("bin")
}

#[test]
fn test_init_writes_loadable_config() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    nrt()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("narrative.yaml"));

    // the scaffold must load back through the real registry path
    let registry = MarkerRegistry::load(&tmp.path().join("narrative.yaml")).expect("loadable");
    assert!(registry.lookup(".go").is_ok());
    assert!(registry.lookup(".md").is_ok());
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    tmp.child("narrative.yaml")
        .write_str("Marker: []\n")
        .expect("write existing");

    nrt()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    // untouched
    let raw = std::fs::read_to_string(tmp.path().join("narrative.yaml")).expect("read");
    assert_eq!(raw, "Marker: []\n");
}

#[test]
fn test_init_force_overwrites() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    tmp.child("narrative.yaml")
        .write_str("Marker: []\n")
        .expect("write existing");

    nrt()
        .current_dir(tmp.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let registry = MarkerRegistry::load(&tmp.path().join("narrative.yaml")).expect("loadable");
    assert!(!registry.markers.is_empty());
}
