use std::fs;

use assert_fs::prelude::*;
use predicates::str::contains;

#[test]
fn missing_root_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("repo-pack")
        .current_dir(&dir)
        .args(["nope"])
        .assert()
        .failure()
        .stderr(contains("cannot open root"));
}

#[test]
fn root_must_be_a_directory() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("file.txt").write_str("x\n").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("repo-pack")
        .current_dir(&dir)
        .args(["file.txt"])
        .assert()
        .failure()
        .stderr(contains("is not a directory"));
}

#[test]
fn all_invalid_exclude_patterns_fail() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("a.c").write_str("int a;\n").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("repo-pack")
        .current_dir(&dir)
        .args(["-x", "[", "."])
        .assert()
        .failure()
        .stderr(contains("Every --exclude pattern was invalid"));
}

#[test]
fn one_valid_exclude_pattern_is_enough() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("a.c").write_str("int a;\n").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("repo-pack")
        .current_dir(&dir)
        .args(["-x", "[", "-x", "*.c", "-p", "proj", "."])
        .assert()
        .success();

    let source = fs::read_to_string(dir.path().join("proj-source.txt")).unwrap();
    assert!(!source.contains("FILE: a.c"), "valid exclude still applies");
}
