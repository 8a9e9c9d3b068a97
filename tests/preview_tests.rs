//! Integration tests for preview command

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::tagsmith_cmd;

#[test]
fn test_preview_prints_sorted_tags() {
    let temp = TempDir::new().unwrap();

    tagsmith_cmd().arg("init").arg(temp.path()).assert().success();

    let output = tagsmith_cmd()
        .current_dir(temp.path())
        .arg("preview")
        .arg("Party Tent")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["parties", "party", "tent", "tents"]);
}

#[test]
fn test_preview_with_description() {
    let temp = TempDir::new().unwrap();

    tagsmith_cmd().arg("init").arg(temp.path()).assert().success();

    tagsmith_cmd()
        .current_dir(temp.path())
        .arg("preview")
        .arg("Chair #12")
        .arg("--description")
        .arg("<b>Oak</b> frame")
        .assert()
        .success()
        .stdout(predicate::str::contains("#12"))
        .stdout(predicate::str::contains("oak"))
        .stdout(predicate::str::contains("frame"));
}

#[test]
fn test_preview_uses_synonyms() {
    let temp = TempDir::new().unwrap();

    tagsmith_cmd().arg("init").arg(temp.path()).assert().success();

    fs::write(
        temp.path().join("synonyms.json"),
        r#"{"tent": ["canopy"]}"#,
    )
    .unwrap();

    tagsmith_cmd()
        .current_dir(temp.path())
        .arg("preview")
        .arg("Tent")
        .assert()
        .success()
        .stdout(predicate::str::contains("canopy"));
}

#[test]
fn test_preview_stopwords_only_yields_nothing() {
    let temp = TempDir::new().unwrap();

    tagsmith_cmd().arg("init").arg(temp.path()).assert().success();

    tagsmith_cmd()
        .current_dir(temp.path())
        .arg("preview")
        .arg("The And Or")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags generated"));
}

#[test]
fn test_preview_outside_catalog_fails() {
    let temp = TempDir::new().unwrap();

    tagsmith_cmd()
        .current_dir(temp.path())
        .arg("preview")
        .arg("Tent")
        .assert()
        .failure()
        .code(2);
}
