//! End-to-end tests for the build workflow.

use super::common::{document_json, write_catalog, BUILD_FIXTURES_DIR};
use kinship::catalog::{run_build, RelatedEntry, RelatedExport, EXPORT_FILE};
use kinship::{CatalogError, RankError, RankMode};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn valid_fixture() -> std::path::PathBuf {
    Path::new(BUILD_FIXTURES_DIR).join("valid")
}

fn read_export(path: &Path) -> RelatedExport {
    let json = fs::read_to_string(path).unwrap();
    serde_json::from_str(&json).unwrap()
}

fn ids(entries: &[RelatedEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn test_run_build_e2e_basic() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output");

    let summary = run_build(&valid_fixture(), &output_path, None, None).unwrap();

    assert_eq!(summary.path, output_path.join(EXPORT_FILE));
    assert!(summary.path.exists(), "related.json should be created");
    assert_eq!(summary.documents, 7);
    assert_eq!(summary.links, 12);
    // Manifest defaults apply when no overrides are given.
    assert_eq!(summary.options.limit, 2);
    assert_eq!(summary.options.mode, RankMode::Mixed);
}

#[test]
fn test_run_build_e2e_related_lists() {
    let temp_dir = TempDir::new().unwrap();
    let summary = run_build(&valid_fixture(), temp_dir.path(), None, None).unwrap();

    let export = read_export(&summary.path);

    assert_eq!(export.version, 1);
    assert_eq!(export.mode, RankMode::Mixed);
    assert_eq!(export.limit, 2);
    assert_eq!(export.related.len(), 7);
    assert_eq!(ids(&export.related["async-rust"]), vec!["tokio-intro", "rust-errors"]);
    assert_eq!(ids(&export.related["react-hooks"]), vec!["react-state", "css-grid"]);
    // Same score, newer first. "Web" only matches "web" after normalization.
    assert_eq!(ids(&export.related["css-grid"]), vec!["react-hooks", "react-state"]);
    assert!(export.related["alps-trip"].is_empty());
    assert_eq!(export.related["async-rust"][0].score, 1.0);
}

#[test]
fn test_run_build_e2e_overrides() {
    let temp_dir = TempDir::new().unwrap();

    let summary = run_build(&valid_fixture(), temp_dir.path(), Some(5), Some("tag")).unwrap();
    let export = read_export(&summary.path);

    assert_eq!(export.mode, RankMode::Tag);
    assert_eq!(export.limit, 5);
    // Tag mode drops the category-only match.
    assert_eq!(ids(&export.related["react-hooks"]), vec!["react-state"]);
    assert!(export.related["css-grid"].is_empty());
}

#[test]
fn test_run_build_e2e_keys_sorted() {
    let temp_dir = TempDir::new().unwrap();
    let summary = run_build(&valid_fixture(), temp_dir.path(), None, None).unwrap();

    let json = fs::read_to_string(&summary.path).unwrap();
    let alps = json.find("\"alps-trip\"").unwrap();
    let tokio = json.find("\"tokio-intro\": [").unwrap();
    assert!(alps < tokio);
}

#[test]
fn test_run_build_e2e_deterministic() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let a = run_build(&valid_fixture(), first.path(), None, None).unwrap();
    let b = run_build(&valid_fixture(), second.path(), None, None).unwrap();

    assert_eq!(
        fs::read_to_string(a.path).unwrap(),
        fs::read_to_string(b.path).unwrap()
    );
}

#[test]
fn test_run_build_e2e_missing_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output");

    // Point to a directory without manifest.json
    let result = run_build(temp_dir.path(), &output_path, None, None);

    assert!(matches!(result, Err(CatalogError::Io { .. })));
    assert!(!output_path.exists(), "nothing should be written");
}

#[test]
fn test_run_build_e2e_invalid_limit() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output");

    let result = run_build(&valid_fixture(), &output_path, Some(-1), None);

    assert!(matches!(
        result,
        Err(CatalogError::Rank(RankError::InvalidArgument { argument: "limit", .. }))
    ));
    assert!(!output_path.join(EXPORT_FILE).exists());
}

#[test]
fn test_run_build_e2e_invalid_mode() {
    let temp_dir = TempDir::new().unwrap();

    let result = run_build(&valid_fixture(), temp_dir.path(), None, Some("popular"));

    assert!(matches!(result, Err(CatalogError::Rank(_))));
}

#[test]
fn test_run_build_e2e_empty_catalog() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_catalog(input.path(), "", &[]);

    let summary = run_build(input.path(), output.path(), None, None).unwrap();
    let export = read_export(&summary.path);

    assert_eq!(summary.documents, 0);
    assert_eq!(summary.links, 0);
    assert!(export.related.is_empty());
}

#[test]
fn test_run_build_e2e_single_document() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_catalog(
        input.path(),
        "",
        &[("only.json", document_json("only", "misc", &["solo"], "2024-01-01T00:00:00Z"))],
    );

    let summary = run_build(input.path(), output.path(), None, None).unwrap();
    let export = read_export(&summary.path);

    assert_eq!(export.related.len(), 1);
    assert!(export.related["only"].is_empty());
}
