//! CLI Integration Tests
//!
//! Run the `folio` binary against project lists written to a temp dir.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const PROJECTS: &str = r#"[
    {"id":"a","title":"Alpha","category":"web","cover":"a.jpg","images":["a1.jpg","a2.jpg"]},
    {"id":"b","title":"Bravo","category":"branding","cover":"b.jpg","images":["b1.jpg"],"size":"wide"},
    {"id":"c","title":"Charlie","category":"web","cover":"c.jpg","images":[],"size":"xl"},
    {"id":"d","title":"Delta","category":"print","images":["d1.jpg"],"visible":false},
    {"id":"a","title":"Echo","category":"branding","cover":"e.jpg","videos":["https://player.example/1"]}
]"#;

fn cli_cmd() -> Command {
    Command::cargo_bin("folio").expect("Failed to find folio binary")
}

/// Write `body` as projects.json in a fresh temp dir.
fn projects_file(body: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("projects.json");
    std::fs::write(&path, body).unwrap();
    (dir, path)
}

// ============================================================================
// Check Command Tests
// ============================================================================

#[test]
fn test_check_prints_totals() {
    let (_dir, path) = projects_file(PROJECTS);

    cli_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Records: 5"))
        .stdout(predicate::str::contains("Visible: 4"))
        .stdout(predicate::str::contains("Hidden: 1"))
        .stdout(predicate::str::contains("Categories: web, branding"));
}

#[test]
fn test_check_reports_problems() {
    let (_dir, path) = projects_file(PROJECTS);

    cli_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Duplicate ids: a"))
        .stdout(predicate::str::contains("Without gallery media: Charlie"))
        .stdout(predicate::str::contains("Without cover: none"));
}

#[test]
fn test_check_preview_hidden_includes_hidden_records() {
    let (_dir, path) = projects_file(PROJECTS);

    cli_cmd()
        .args(["check", "--preview-hidden"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Shown: 5"))
        .stdout(predicate::str::contains("Without cover: Delta"))
        .stdout(predicate::str::contains("print"));
}

#[test]
fn test_check_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .arg("check")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not fetch"));
}

#[test]
fn test_check_rejects_non_array() {
    let (_dir, path) = projects_file(r#"{"title":"Alpha"}"#);

    cli_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project list"));
}

// ============================================================================
// Categories Command Tests
// ============================================================================

#[test]
fn test_categories_counts_in_first_seen_order() {
    let (_dir, path) = projects_file(PROJECTS);

    let output = cli_cmd()
        .arg("categories")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let web = stdout.find("web").unwrap();
    let branding = stdout.find("branding").unwrap();
    assert!(web < branding);
    assert!(stdout.contains("Web/App"));
    // Hidden records are not counted.
    assert!(!stdout.contains("print"));
}

#[test]
fn test_categories_empty_list() {
    let (_dir, path) = projects_file("[]");

    cli_cmd()
        .arg("categories")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No categories found."));
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_uses_layout_order() {
    let (_dir, path) = projects_file(PROJECTS);

    let output = cli_cmd()
        .arg("list")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "Filter: All (4 tiles)");
    // xl first, then wide, then the rest in data order.
    assert!(lines[1].contains("Charlie"));
    assert!(lines[2].contains("Bravo"));
    assert!(lines[3].contains("Alpha"));
    assert!(lines[4].contains("Echo"));
}

#[test]
fn test_list_filters_by_category() {
    let (_dir, path) = projects_file(PROJECTS);

    cli_cmd()
        .args(["list", "--category", "branding"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter: Branding (2 tiles)"))
        .stdout(predicate::str::contains("Bravo"))
        .stdout(predicate::str::contains("Alpha").not());
}

#[test]
fn test_list_preview_hidden_flags_missing_cover() {
    let (_dir, path) = projects_file(PROJECTS);

    cli_cmd()
        .args(["list", "--category", "print", "--preview-hidden"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Delta"))
        .stdout(predicate::str::contains("no cover"))
        .stdout(predicate::str::contains("(hidden)"));
}

// ============================================================================
// Route Command Tests
// ============================================================================

#[test]
fn test_route_known_category() {
    let (_dir, path) = projects_file(PROJECTS);

    cli_cmd()
        .args(["route", "#gallery/web"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection: web"))
        .stdout(predicate::str::contains("Tiles: 2"));
}

#[test]
fn test_route_unknown_category_falls_back_to_all() {
    let (_dir, path) = projects_file(PROJECTS);

    cli_cmd()
        .args(["route", "#gallery/sculpture"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection: all"))
        .stdout(predicate::str::contains("Tiles: 4"));
}

#[test]
fn test_route_ignores_legacy_brand_segment() {
    let (_dir, path) = projects_file(PROJECTS);

    cli_cmd()
        .args(["route", "#Gallery/branding/acme"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection: branding"));
}

#[test]
fn test_route_custom_section() {
    let (_dir, path) = projects_file(PROJECTS);

    cli_cmd()
        .args(["--section", "work", "route", "#work/web"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection: web"));
}

#[test]
fn test_config_file_supplies_labels() {
    let (dir, path) = projects_file(PROJECTS);
    let config = dir.path().join("site.json");
    std::fs::write(
        &config,
        r#"{"categories":[{"slug":"web","label":"Digital"}]}"#,
    )
    .unwrap();

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .args(["list", "--category", "web"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter: Digital (2 tiles)"));
}
