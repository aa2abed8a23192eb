//! Integration tests for the projcheck CLI
//!
//! These tests run the binary against temporary Android project trees and
//! check its output and exit codes.

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;


use assert_cmd::cargo;
use predicates::prelude::*;

use common::{COMPLETE_GRADLE, ProjectBuilder};

/// Helper function to create a projcheck command
fn projcheck() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("projcheck"))
}

const MAIN_ACTIVITY: &str = "app/src/main/java/com/audioplayer/MainActivity.kt";

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    projcheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("projcheck"));
}

#[test]
fn test_help() {
    projcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validate an Android application project"));
}

#[test]
fn test_no_args_shows_info() {
    projcheck()
        .assert()
        .success()
        .stdout(predicate::str::contains("projcheck v"));
}

// =============================================================================
// VALIDATE
// =============================================================================

/// An empty root reports every path missing and exits 1
#[test]
fn test_validate_empty_project_fails() {
    let project = ProjectBuilder::empty();

    projcheck()
        .args(["validate", "--root", &project.root_arg()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[MISSING] Root build script: build.gradle"))
        .stdout(predicate::str::contains("[MISSING] Resource directory: app/src/main/res"))
        .stdout(predicate::str::contains("[ERROR] Build descriptor missing: build.gradle"))
        .stdout(predicate::str::contains("[ERROR] Project structure has problems"))
        .stdout(predicate::str::contains("Project has problems"));
}

/// Everything present and clean exits 0
#[test]
fn test_validate_complete_project_passes() {
    let project = ProjectBuilder::complete();

    projcheck()
        .args(["validate", "--root", &project.root_arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[MISSING]").not())
        .stdout(predicate::str::contains("[OK] Build configuration complete: build.gradle"))
        .stdout(predicate::str::contains("[OK] Source heuristics passed"))
        .stdout(predicate::str::contains("Project validation passed"));
}

/// Validation uses the current directory when --root is omitted
#[test]
fn test_validate_defaults_to_current_dir() {
    let project = ProjectBuilder::complete();

    projcheck().arg("validate").current_dir(project.path()).assert().success();
}

#[test]
fn test_validate_reports_brace_mismatch() {
    let source =
        "package com.audioplayer\nclass MainActivity {\n  fun a() {\n    if (b) {\n  }\n}\n";
    let project = ProjectBuilder::complete().file(MAIN_ACTIVITY, source);

    projcheck()
        .args(["validate", "--root", &project.root_arg()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(format!("[WARNING] {MAIN_ACTIVITY}: 1 issue(s) found:")))
        .stdout(predicate::str::contains("   - brace mismatch: 3 opening, 2 closing"))
        .stdout(predicate::str::contains("[OK] Project structure complete"))
        .stdout(predicate::str::contains("[ERROR] Source heuristics found issues"));
}

#[test]
fn test_validate_reports_missing_dependency_once() {
    let gradle =
        COMPLETE_GRADLE.replace("androidx.media3:media3-exoplayer", "androidx.media3:media3-ui");
    let project = ProjectBuilder::complete().file("build.gradle", &gradle);

    let output = projcheck()
        .args(["validate", "--root", &project.root_arg()])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    assert_eq!(stdout.matches("[WARNING] Missing dependencies").count(), 1);
    assert!(stdout.contains("[androidx.media3:media3-exoplayer]"));
    assert!(!stdout.contains("Missing plugins"));
}

/// Discovery picks up Kotlin files outside the fixed list
#[test]
fn test_validate_discover_scans_extra_sources() {
    let project = ProjectBuilder::complete()
        .file("app/src/main/java/com/audioplayer/ui/theme/Theme.kt", "fun Theme() {");

    projcheck()
        .args(["validate", "--root", &project.root_arg()])
        .assert()
        .success();

    projcheck()
        .args(["validate", "--discover", "--root", &project.root_arg()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ui/theme/Theme.kt: 3 issue(s) found:"))
        .stdout(predicate::str::contains("PlayModeTest.kt: heuristic check passed"));
}

#[test]
fn test_validate_json_output() {
    let project = ProjectBuilder::complete().remove("gradlew.bat");

    let output = projcheck()
        .args(["--json", "validate", "--root", &project.root_arg()])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["overall_ok"], false);
    assert_eq!(json["summary"]["structure_ok"], false);
    assert_eq!(json["summary"]["syntax_ok"], true);
    assert_eq!(json["build"]["status"], "checked");
    let missing: Vec<&str> = json["structure"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|r| r["exists"] == false)
        .map(|r| r["path"].as_str().unwrap())
        .collect();
    assert_eq!(missing, vec!["gradlew.bat"]);
}

#[test]
fn test_validate_nonexistent_root_is_fatal() {
    let project = ProjectBuilder::empty();
    let missing = project.path().join("does-not-exist");

    projcheck()
        .args(["validate", "--root", &missing.to_string_lossy()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not a directory"));
}

/// A directory where a source file is expected is missing, and not scanned
#[test]
fn test_validate_directory_in_place_of_source() {
    let project = ProjectBuilder::complete().remove(MAIN_ACTIVITY).dir(MAIN_ACTIVITY);

    projcheck()
        .args(["validate", "--root", &project.root_arg()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[MISSING] Main activity"))
        .stdout(predicate::str::contains("MainActivity.kt: heuristic").not());
}

#[test]
fn test_validate_non_utf8_source_is_an_issue() {
    let project = ProjectBuilder::complete();
    std::fs::write(project.path().join(MAIN_ACTIVITY), [0xc3, 0x28]).unwrap();

    projcheck()
        .args(["validate", "--root", &project.root_arg()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(format!("[WARNING] {MAIN_ACTIVITY}: 1 issue(s) found:")))
        .stdout(predicate::str::contains("   - failed to read file:"));
}
