// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The content catalog: a read-only snapshot of posts the ranker draws from.
//!
//! The catalog is the ranker's caller. It owns the things the ranker refuses
//! to do: looking up the reference by id (and reporting `NotFound`), keeping
//! ids unique, and narrowing the candidate pool through the tag index before
//! handing it over.

mod document;
pub mod export;
mod manifest;
pub mod parallel;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::error::{CatalogError, RankError};
use crate::inverted::TagIndex;
use crate::rank::rank_with;
use crate::types::{ContentItem, RankOptions, SimilarityResult};

pub use document::*;
pub use export::{run_build, BuildSummary, RelatedEntry, RelatedExport, EXPORT_FILE};
pub use manifest::*;
pub use parallel::{load_catalog, load_documents, read_manifest, related_all, LoadedCatalog};

#[cfg(feature = "parallel")]
pub use parallel::related_all_with_progress;

/// Immutable set of documents with id lookup and a tag index.
#[derive(Debug, Clone)]
pub struct Catalog {
    documents: Vec<Document>,
    by_id: HashMap<String, usize>,
    index: TagIndex,
}

impl Catalog {
    /// Build a catalog. Fails on the first duplicate id.
    pub fn new(documents: Vec<Document>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(documents.len());
        for (position, doc) in documents.iter().enumerate() {
            if by_id.insert(doc.item.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(doc.item.id.clone()));
            }
        }
        let index = TagIndex::build(documents.iter().map(|doc| &doc.item));

        Ok(Self {
            documents,
            by_id,
            index,
        })
    }

    /// Build a catalog from bare items (no titles or hrefs).
    pub fn from_items(items: Vec<ContentItem>) -> Result<Self, CatalogError> {
        Self::new(items.into_iter().map(Document::from).collect())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn items(&self) -> impl Iterator<Item = &ContentItem> {
        self.documents.iter().map(|doc| &doc.item)
    }

    pub fn tag_index(&self) -> &TagIndex {
        &self.index
    }

    pub fn get(&self, id: &str) -> Result<&Document, CatalogError> {
        self.by_id
            .get(id)
            .map(|&position| &self.documents[position])
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Related items for the document with `id`.
    pub fn related(
        &self,
        id: &str,
        options: &RankOptions,
    ) -> Result<SimilarityResult, CatalogError> {
        let reference = &self.get(id)?.item;
        Ok(self.related_to(reference, options)?)
    }

    /// Related items for an arbitrary reference, which need not be in the
    /// catalog (a draft being previewed, say).
    pub fn related_to(
        &self,
        reference: &ContentItem,
        options: &RankOptions,
    ) -> Result<SimilarityResult, RankError> {
        let positions = self.index.candidates(reference, options.mode);
        rank_with(
            reference,
            positions.iter().map(|&p| &self.documents[p].item),
            options,
        )
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            items: self.len(),
            ..CatalogStats::default()
        };

        for item in self.items() {
            *stats.categories.entry(item.category.clone()).or_default() += 1;
            for tag in &item.tags {
                *stats.tags.entry(tag.clone()).or_default() += 1;
            }
            if item.tags.is_empty() {
                stats.untagged += 1;
            }
            stats.oldest = Some(stats.oldest.map_or(item.published_at, |t| t.min(item.published_at)));
            stats.newest = Some(stats.newest.map_or(item.published_at, |t| t.max(item.published_at)));
        }

        stats
    }
}

/// Summary counts for `kinship inspect`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub items: usize,
    pub categories: BTreeMap<String, usize>,
    pub tags: BTreeMap<String, usize>,
    pub untagged: usize,
    pub oldest: Option<DateTime<Utc>>,
    pub newest: Option<DateTime<Utc>>,
}
