//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use chrono::{DateTime, TimeZone, Utc};

use crate::catalog::Document;
use crate::types::ContentItem;

/// Timestamp `secs` seconds after 2024-01-01T00:00:00Z.
pub fn timestamp(secs: i64) -> DateTime<Utc> {
    let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    epoch + chrono::Duration::seconds(secs)
}

/// Create a content item. `secs` is relative to [`timestamp`]'s epoch.
///
/// This is the canonical implementation used across all tests.
pub fn make_item(id: &str, category: &str, tags: &[&str], secs: i64) -> ContentItem {
    ContentItem::new(id, category, tags.iter().copied(), timestamp(secs))
}

/// Create a catalog document with a title derived from the id.
pub fn make_document(id: &str, category: &str, tags: &[&str], secs: i64) -> Document {
    Document {
        item: make_item(id, category, tags, secs),
        title: Some(format!("Post {}", id)),
        href: Some(format!("/posts/{}", id)),
    }
}

/// The reference/candidate set used to document mixed-mode ranking.
///
/// - reference `r`: `{react, javascript}` in `web`
/// - `a`: `{react, hooks}` in `web` (tag 0.5, category 0.5), newest
/// - `b`: `{css}` in `web` (category 0.5 only)
/// - `c`: `{react, javascript}` in `mobile` (tag 1.0), oldest
pub fn worked_example() -> (ContentItem, Vec<ContentItem>) {
    let reference = make_item("r", "web", &["react", "javascript"], 0);
    let pool = vec![
        make_item("a", "web", &["react", "hooks"], 300),
        make_item("b", "web", &["css"], 200),
        make_item("c", "mobile", &["react", "javascript"], 100),
    ];
    (reference, pool)
}
