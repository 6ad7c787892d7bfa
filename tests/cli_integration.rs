//! Integration tests for the CLI
//!
//! Runs the built binary against temporary Java source trees for the apply
//! and check commands

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CUSTOMER: &str = r#"package com.example.customer;

import lombok.AllArgsConstructor;
import lombok.Getter;

@Getter
@AllArgsConstructor
public class CustomerResponse {

    private final String id;
    private final String name;

    public CustomerResponse(String id, String name) {
        this.id = id;
        this.name = name;
    }

    public String getId() {
        return id;
    }

    public String getName() {
        return name;
    }
}
"#;

const CUSTOMER_STRIPPED: &str = r#"package com.example.customer;

import lombok.AllArgsConstructor;
import lombok.Getter;

@Getter
@AllArgsConstructor
public class CustomerResponse {

    private final String id;
    private final String name;
}
"#;

const PLAIN: &str = r#"package com.example.customer;

public class Plain {

    private final String id;

    public Plain(String id) { this.id = id; }

    public String getId() { return id; }
}
"#;

/// Helper to create a source tree with one eligible and one plain class
fn setup_test_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src/main/java/com/example/customer");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("CustomerResponse.java"), CUSTOMER).unwrap();
    fs::write(src.join("Plain.java"), PLAIN).unwrap();
    dir
}

fn customer_path(root: &Path) -> std::path::PathBuf {
    root.join("src/main/java/com/example/customer/CustomerResponse.java")
}

fn plain_path(root: &Path) -> std::path::PathBuf {
    root.join("src/main/java/com/example/customer/Plain.java")
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lombok-strip"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

#[test]
fn test_apply_help() {
    let output = run(&["apply", "--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Strip redundant constructors and getters"));
}

#[test]
fn test_apply_directory() {
    let tree = setup_test_tree();
    let output = run(&["apply", tree.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Modified:"));
    assert!(stdout.contains("Skipped:"));
    assert!(stdout.contains("Total files modified: 1/2"));

    assert_eq!(
        fs::read_to_string(customer_path(tree.path())).unwrap(),
        CUSTOMER_STRIPPED
    );
    assert_eq!(fs::read_to_string(plain_path(tree.path())).unwrap(), PLAIN);
}

#[test]
fn test_apply_idempotent() {
    let tree = setup_test_tree();
    let root = tree.path().to_str().unwrap();

    run(&["apply", root]);
    let output = run(&["apply", root]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total files modified: 0/2"));
    assert!(stdout.contains("nothing to remove"));
}

#[test]
fn test_apply_dry_run() {
    let tree = setup_test_tree();
    let output = run(&["apply", "--dry-run", tree.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DRY RUN"));
    assert!(stdout.contains("Would modify"));
    assert_eq!(
        fs::read_to_string(customer_path(tree.path())).unwrap(),
        CUSTOMER
    );
}

#[test]
fn test_apply_with_diff() {
    let tree = setup_test_tree();
    let output = run(&["apply", "--diff", tree.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("(stripped)"));
    assert!(stdout.contains("-    public String getId() {"));
}

#[test]
fn test_apply_reports_missing_files() {
    let tree = setup_test_tree();
    let missing = tree.path().join("Missing.java");
    let customer = customer_path(tree.path());

    let output = run(&[
        "apply",
        missing.to_str().unwrap(),
        customer.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Not found:"));
    assert!(stdout.contains("Total files modified: 1/2"));
}

#[test]
fn test_apply_counts_repeated_paths_once() {
    let tree = setup_test_tree();
    let customer = customer_path(tree.path());
    let customer = customer.to_str().unwrap();

    let output = run(&["apply", customer, customer]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total files modified: 1/1"));
    assert!(stdout.contains("1 duplicate path ignored"));
}

#[test]
fn test_apply_with_manifest() {
    let tree = setup_test_tree();
    let manifest = tree.path().join("strip.toml");
    fs::write(
        &manifest,
        r#"[meta]
name = "customer"
root = "src/main/java/com/example/customer"

[input]
files = ["CustomerResponse.java", "Gone.java"]
"#,
    )
    .unwrap();

    let output = run(&["apply", "--manifest", manifest.to_str().unwrap(), "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = report["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["status"], "modified");
    assert_eq!(entries[0]["constructors"][0], "CustomerResponse");
    assert_eq!(entries[0]["getters"][0], "getId");
    assert_eq!(entries[1]["status"], "not_found");
}

#[test]
fn test_apply_fails_fast_on_unreadable_file() {
    let tree = setup_test_tree();
    let bad = tree.path().join("Bad.java");
    fs::write(&bad, [0xff, 0xfe, 0xfd]).unwrap();
    let customer = customer_path(tree.path());

    let output = run(&["apply", bad.to_str().unwrap(), customer.to_str().unwrap()]);

    assert!(!output.status.success());
    assert_eq!(fs::read_to_string(&customer).unwrap(), CUSTOMER);
}

#[test]
fn test_apply_keep_going() {
    let tree = setup_test_tree();
    let bad = tree.path().join("Bad.java");
    fs::write(&bad, [0xff, 0xfe, 0xfd]).unwrap();
    let customer = customer_path(tree.path());

    let output = run(&[
        "apply",
        "--keep-going",
        bad.to_str().unwrap(),
        customer.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed:"));
    assert_eq!(
        fs::read_to_string(&customer).unwrap(),
        CUSTOMER_STRIPPED
    );
}

#[test]
fn test_check_reports_pending_files() {
    let tree = setup_test_tree();
    let output = run(&["check", tree.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("redundant members"));
    assert!(stderr.contains("getter getName"));
    assert_eq!(
        fs::read_to_string(customer_path(tree.path())).unwrap(),
        CUSTOMER
    );
}

#[test]
fn test_check_clean_after_apply() {
    let tree = setup_test_tree();
    let root = tree.path().to_str().unwrap();

    run(&["apply", root]);
    let output = run(&["check", root]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 need stripping"));
}

#[test]
fn test_no_inputs() {
    let output = run(&["apply"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No input files"));
}
