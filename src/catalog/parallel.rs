// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel catalog loading and batch ranking.
//!
//! The expensive parts of generating related-post lists for a whole site are
//! (1) reading and parsing one JSON file per post and (2) ranking every post
//! against the rest. Both are embarrassingly parallel: `par_iter()` over files,
//! `par_iter()` over reference items. The ranker is pure, so sharing the
//! catalog across threads needs nothing beyond `&`.
//!
//! Without the `parallel` feature the same functions run sequentially and
//! produce identical output.

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{CatalogError, RankError};
use crate::types::{RankOptions, SimilarityResult};
use crate::utils::normalize;

use super::{Catalog, CatalogManifest, Document, MANIFEST_VERSION};

/// A catalog together with the manifest it was loaded from.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub manifest: CatalogManifest,
    pub catalog: Catalog,
}

/// Read and validate `manifest.json` in `input_dir`.
pub fn read_manifest(input_dir: &Path) -> Result<CatalogManifest, CatalogError> {
    let path = input_dir.join("manifest.json");
    let content = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
        path: path.clone(),
        source,
    })?;
    let manifest: CatalogManifest =
        serde_json::from_str(&content).map_err(|source| CatalogError::Parse { path, source })?;

    if manifest.version != MANIFEST_VERSION {
        return Err(CatalogError::UnsupportedVersion {
            found: manifest.version,
            expected: MANIFEST_VERSION,
        });
    }
    Ok(manifest)
}

fn load_document(input_dir: &Path, filename: &str) -> Result<Document, CatalogError> {
    let path = input_dir.join(filename);
    let content = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
        path: path.clone(),
        source,
    })?;
    let doc = serde_json::from_str::<Document>(&content)
        .map_err(|source| CatalogError::Parse { path, source })?;
    tracing::debug!(file = filename, id = doc.id(), "loaded document");
    Ok(doc)
}

/// Load all documents listed in the manifest.
///
/// Any unreadable or malformed file aborts the load. Documents come back
/// sorted by id so catalog order doesn't depend on thread scheduling.
pub fn load_documents(
    input_dir: &Path,
    manifest: &CatalogManifest,
) -> Result<Vec<Document>, CatalogError> {
    #[cfg(feature = "parallel")]
    let iter = manifest.documents.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = manifest.documents.iter();

    let mut docs = iter
        .map(|filename| load_document(input_dir, filename))
        .collect::<Result<Vec<Document>, CatalogError>>()?;

    if manifest.normalize_tags {
        docs.iter_mut().for_each(normalize_document);
    }

    docs.sort_by(|a, b| a.item.id.cmp(&b.item.id));
    Ok(docs)
}

/// Normalize category and tags in place. Tags that collapse to the same
/// normalized form merge; tags that normalize to nothing are dropped.
fn normalize_document(doc: &mut Document) {
    doc.item.category = normalize(&doc.item.category);
    doc.item.tags = std::mem::take(&mut doc.item.tags)
        .iter()
        .map(|tag| normalize(tag))
        .filter(|tag| !tag.is_empty())
        .collect();
}

/// Read the manifest and every document, then build the catalog.
pub fn load_catalog(input_dir: &Path) -> Result<LoadedCatalog, CatalogError> {
    let manifest = read_manifest(input_dir)?;
    let documents = load_documents(input_dir, &manifest)?;
    let catalog = Catalog::new(documents)?;

    tracing::info!(
        dir = %input_dir.display(),
        documents = catalog.len(),
        normalized = manifest.normalize_tags,
        "catalog loaded"
    );
    if catalog.is_empty() {
        tracing::warn!(dir = %input_dir.display(), "catalog is empty");
    }

    Ok(LoadedCatalog { manifest, catalog })
}

/// Rank every document in the catalog, in catalog order.
pub fn related_all(
    catalog: &Catalog,
    options: &RankOptions,
) -> Result<Vec<SimilarityResult>, RankError> {
    let options = RankOptions::new(options.limit, options.mode)?;

    #[cfg(feature = "parallel")]
    let iter = catalog.documents().par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = catalog.documents().iter();

    iter.map(|doc| catalog.related_to(&doc.item, &options))
        .collect()
}

/// [`related_all`] with progress reporting.
#[cfg(feature = "parallel")]
pub fn related_all_with_progress(
    catalog: &Catalog,
    options: &RankOptions,
    progress: &ProgressBar,
) -> Result<Vec<SimilarityResult>, RankError> {
    let options = RankOptions::new(options.limit, options.mode)?;
    let counter = AtomicUsize::new(0);
    let total = catalog.len();

    catalog
        .documents()
        .par_iter()
        .map(|doc| {
            let result = catalog.related_to(&doc.item, &options)?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count.is_multiple_of(50) || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(result)
        })
        .collect()
}
