//! Shared test utilities and fixtures.

#![allow(dead_code)]

use kinship::{Catalog, ContentItem, RankMode, SimilarityResult};
use std::fs;
use std::path::Path;

// Re-export canonical test utilities from kinship::testing
#[allow(unused_imports)]
pub use kinship::testing::{make_document, make_item, timestamp, worked_example};

/// Directory containing on-disk catalog fixtures.
pub const BUILD_FIXTURES_DIR: &str = "data/build-fixtures";

// ============================================================================
// BLOG FIXTURES
// ============================================================================

/// A small blog with overlapping tags across three categories.
pub fn sample_blog() -> Vec<ContentItem> {
    vec![
        make_item("async-rust", "rust", &["rust", "async", "tokio"], 500),
        make_item("rust-errors", "rust", &["rust", "errors"], 400),
        make_item("tokio-intro", "rust", &["rust", "async", "tokio"], 300),
        make_item("react-hooks", "web", &["react", "javascript", "hooks"], 450),
        make_item("react-state", "web", &["react", "javascript"], 350),
        make_item("css-grid", "web", &["css"], 250),
        make_item("wasm-react", "web", &["rust", "react", "wasm"], 200),
        make_item("alps-trip", "travel", &["hiking", "alps"], 150),
        make_item("untagged-note", "misc", &[], 100),
    ]
}

pub fn sample_catalog() -> Catalog {
    Catalog::from_items(sample_blog()).unwrap()
}

pub fn find<'a>(items: &'a [ContentItem], id: &str) -> &'a ContentItem {
    items
        .iter()
        .find(|item| item.id == id)
        .unwrap_or_else(|| panic!("no item {}", id))
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Check every structural guarantee a ranking result makes.
pub fn assert_result_well_formed(result: &SimilarityResult, reference: &ContentItem, limit: usize) {
    assert!(result.len() <= limit, "{} items for limit {}", result.len(), limit);
    assert_eq!(result.reference_id, reference.id);
    assert!(
        result.items.iter().all(|s| s.item.id != reference.id),
        "reference {} in its own result",
        reference.id
    );
    for pair in result.items.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "scores out of order: {} then {}",
            pair[0].score,
            pair[1].score
        );
    }
    for scored in &result.items {
        assert!(scored.score > 0.0 && scored.score <= 1.0, "score {}", scored.score);
        match result.mode {
            RankMode::Tag => assert!(scored.item.shared_tags(reference) > 0),
            RankMode::Category => assert_eq!(scored.item.category, reference.category),
            RankMode::Mixed => {}
        }
    }
}

// ============================================================================
// ON-DISK CATALOGS
// ============================================================================

/// Write `manifest.json` plus one JSON file per document into `dir`.
pub fn write_catalog(dir: &Path, manifest_extra: &str, documents: &[(&str, String)]) {
    fs::create_dir_all(dir.join("posts")).unwrap();
    let files: Vec<String> = documents
        .iter()
        .map(|(name, _)| format!("\"posts/{}\"", name))
        .collect();
    let manifest = format!(
        "{{\"version\": 1, \"documents\": [{}]{}}}",
        files.join(", "),
        manifest_extra
    );
    fs::write(dir.join("manifest.json"), manifest).unwrap();
    for (name, body) in documents {
        fs::write(dir.join("posts").join(name), body).unwrap();
    }
}

/// JSON body for a document file.
pub fn document_json(id: &str, category: &str, tags: &[&str], published_at: &str) -> String {
    let tags: Vec<String> = tags.iter().map(|t| format!("\"{}\"", t)).collect();
    format!(
        r#"{{"id": "{}", "title": "Post {}", "category": "{}", "tags": [{}], "publishedAt": "{}"}}"#,
        id,
        id,
        category,
        tags.join(", "),
        published_at
    )
}
