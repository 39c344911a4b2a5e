// SPDX-License-Identifier: MIT OR Apache-2.0

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, content).expect("write file");
}

fn write_catalog_with_title(dir: &Path, title: &str) {
    write_file(
        &dir.join("catalog.toml"),
        &format!("[[document]]\nid = \"doc\"\ntitle = \"{title}\"\npath = \"doc.txt\"\n"),
    );
}

fn docgrep(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docgrep"));
    cmd.current_dir(dir).env("NO_COLOR", "1");
    cmd
}

fn run_index(dir: &Path, args: &[&str]) -> String {
    let assert = docgrep(dir).args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout")
}

fn search_json(dir: &Path, query: &str) -> Value {
    let assert = docgrep(dir)
        .args(["--format", "json", "--compact", "search", query])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    serde_json::from_str(&stdout).expect("json output")
}

#[test]
fn index_writes_cache_artifacts() {
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("doc.txt"), "page one\u{0c}page two");
    write_catalog_with_title(dir.path(), "Doc");

    run_index(dir.path(), &["index"]);

    assert!(dir.path().join(".docgrep/version").exists());
    assert!(dir.path().join(".docgrep/index-v1.json").exists());
}

#[test]
fn index_summary_reports_documents_and_pages() {
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("doc.txt"), "page one\u{0c}page two\u{0c}page three");
    write_catalog_with_title(dir.path(), "Doc");

    let summary = run_index(dir.path(), &["--format", "json", "--compact", "index"]);
    let summary: Value = serde_json::from_str(&summary).expect("json");
    assert_eq!(summary["documents"], 1);
    assert_eq!(summary["pages"], 3);
    assert_eq!(summary["from_cache"], false);

    let again = run_index(dir.path(), &["--format", "json", "--compact", "index"]);
    let again: Value = serde_json::from_str(&again).expect("json");
    assert_eq!(again["from_cache"], true);
}

#[test]
fn force_reextracts_despite_valid_cache() {
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("doc.txt"), "original text");
    write_catalog_with_title(dir.path(), "Doc");
    run_index(dir.path(), &["index"]);

    write_file(&dir.path().join("doc.txt"), "rewritten text");
    let summary = run_index(dir.path(), &["--format", "json", "--compact", "index", "--force"]);
    let summary: Value = serde_json::from_str(&summary).expect("json");
    assert_eq!(summary["from_cache"], false);

    let results = search_json(dir.path(), "rewritten");
    assert_eq!(results.as_array().expect("array").len(), 1);
}

#[test]
fn unchanged_catalog_serves_stale_text_from_cache() {
    // Document content is fingerprinted only through the catalog; editing
    // a file without touching the catalog keeps the cached text live.
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("doc.txt"), "before the edit");
    write_catalog_with_title(dir.path(), "Doc");
    run_index(dir.path(), &["index"]);

    write_file(&dir.path().join("doc.txt"), "after the edit");

    let stale = search_json(dir.path(), "before");
    assert_eq!(stale.as_array().expect("array").len(), 1);
    let fresh = search_json(dir.path(), "after");
    assert_eq!(fresh.as_array().expect("array").len(), 0);
}

#[test]
fn catalog_signature_change_discards_cache() {
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("doc.txt"), "before the edit");
    write_catalog_with_title(dir.path(), "Doc");
    run_index(dir.path(), &["index"]);

    // Edit the content *and* the catalog; the new signature must force
    // re-extraction even though the cached payload would still answer.
    write_file(&dir.path().join("doc.txt"), "after the edit");
    write_catalog_with_title(dir.path(), "Doc (2nd ed.)");

    let fresh = search_json(dir.path(), "after");
    assert_eq!(fresh.as_array().expect("array").len(), 1);
    let stale = search_json(dir.path(), "before");
    assert_eq!(stale.as_array().expect("array").len(), 0);
}

#[test]
fn corrupt_cache_is_rebuilt_silently() {
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("doc.txt"), "working text");
    write_catalog_with_title(dir.path(), "Doc");
    run_index(dir.path(), &["index"]);

    write_file(&dir.path().join(".docgrep/index-v1.json"), "{ definitely not json");

    docgrep(dir.path())
        .args(["search", "working"])
        .assert()
        .success()
        .stdout(predicate::str::contains("p.1:"));
}

#[test]
fn missing_catalog_is_an_error() {
    let dir = TempDir::new().expect("tempdir");
    docgrep(dir.path())
        .args(["search", "anything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog.toml"));
}
