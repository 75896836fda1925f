// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted tag and category index.
//!
//! The ranker is a linear scan, which is fine for a blog. When the catalog
//! grows, most of that scan is wasted on items that can't score above zero.
//! This index finds the items that *can* score, so only those get handed to
//! the ranker. It never changes what the ranker returns.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTING_LIST_SORTED**: each posting list is sorted by position, no duplicates
//! 2. **NON_EMPTY**: every key has at least one posting
//! 3. **POSTING_WELLFORMED**: every posting is a valid position into the indexed items
//! 4. **PREFILTER_EXACT**: ranking `candidates(reference, mode)` gives the same
//!    result as ranking every item

use crate::types::{ContentItem, RankMode};
use std::collections::HashMap;

/// Positions of indexed items, sorted ascending.
pub type PostingList = Vec<usize>;

/// Tag → items and category → items.
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    tags: HashMap<String, PostingList>,
    categories: HashMap<String, PostingList>,
    ids: Vec<String>,
}

impl TagIndex {
    /// Build the index over `items`. Positions refer to iteration order.
    pub fn build<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a ContentItem>,
    {
        let mut index = TagIndex::default();

        for (position, item) in items.into_iter().enumerate() {
            // Positions increase monotonically, so pushes keep lists sorted.
            for tag in &item.tags {
                index.tags.entry(tag.clone()).or_default().push(position);
            }
            index
                .categories
                .entry(item.category.clone())
                .or_default()
                .push(position);
            index.ids.push(item.id.clone());
        }

        index
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn tag_postings(&self, tag: &str) -> &[usize] {
        self.tags.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn category_postings(&self, category: &str) -> &[usize] {
        self.categories.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct tags.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Positions of items that can score above zero against `reference`.
    ///
    /// Sorted, deduplicated, and never containing an item whose id equals the
    /// reference id.
    pub fn candidates(&self, reference: &ContentItem, mode: RankMode) -> Vec<usize> {
        let mut positions: Vec<usize> = Vec::new();

        if matches!(mode, RankMode::Tag | RankMode::Mixed) {
            for tag in &reference.tags {
                positions.extend_from_slice(self.tag_postings(tag));
            }
        }
        if matches!(mode, RankMode::Category | RankMode::Mixed) {
            positions.extend_from_slice(self.category_postings(&reference.category));
        }

        positions.sort_unstable();
        positions.dedup();
        positions.retain(|&p| self.ids[p] != reference.id);
        positions
    }
}
