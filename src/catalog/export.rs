// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Site-wide related-post export.
//!
//! `kinship build` ranks every post once and writes a single `related.json`
//! a static site generator can read at template time:
//!
//! ```json
//! {
//!   "version": 1,
//!   "mode": "mixed",
//!   "limit": 3,
//!   "related": {
//!     "react-hooks": [{ "id": "react-state", "score": 0.5 }]
//!   }
//! }
//! ```
//!
//! Keys are sorted so the file diffs cleanly between builds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::CatalogError;
use crate::types::{RankMode, RankOptions, SimilarityResult};

use super::parallel::load_catalog;

/// Version of the `related.json` layout.
pub const EXPORT_VERSION: u32 = 1;

/// File name written into the output directory.
pub const EXPORT_FILE: &str = "related.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RelatedEntry {
    pub id: String,
    pub score: f64,
}

/// Contents of `related.json`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RelatedExport {
    pub version: u32,
    pub mode: RankMode,
    pub limit: usize,
    pub related: BTreeMap<String, Vec<RelatedEntry>>,
}

impl RelatedExport {
    pub fn from_results(options: &RankOptions, results: &[SimilarityResult]) -> Self {
        let related = results
            .iter()
            .map(|result| {
                let entries = result
                    .items
                    .iter()
                    .map(|scored| RelatedEntry {
                        id: scored.item.id.clone(),
                        score: scored.score,
                    })
                    .collect();
                (result.reference_id.clone(), entries)
            })
            .collect();

        Self {
            version: EXPORT_VERSION,
            mode: options.mode,
            limit: options.limit,
            related,
        }
    }

    /// Write to `<output_dir>/related.json`, creating the directory.
    pub fn write_to(&self, output_dir: &Path) -> Result<PathBuf, CatalogError> {
        fs::create_dir_all(output_dir).map_err(|source| CatalogError::Io {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let path = output_dir.join(EXPORT_FILE);
        let json = serde_json::to_string_pretty(self).map_err(CatalogError::Serialize)?;
        fs::write(&path, json).map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// What a build produced.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSummary {
    pub path: PathBuf,
    pub documents: usize,
    pub links: usize,
    pub options: RankOptions,
}

/// Create a progress style for the ranking progress bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Load the catalog in `input_dir`, rank every document, write `related.json`.
///
/// `limit` and `mode` override the manifest defaults when given.
pub fn run_build(
    input_dir: &Path,
    output_dir: &Path,
    limit: Option<i64>,
    mode: Option<&str>,
) -> Result<BuildSummary, CatalogError> {
    let loaded = load_catalog(input_dir)?;
    let options = loaded.manifest.defaults.resolve(limit, mode)?;
    let catalog = &loaded.catalog;

    #[cfg(feature = "parallel")]
    let results = {
        let progress = ProgressBar::new(catalog.len() as u64);
        progress.set_style(create_progress_style());
        progress.set_prefix("Ranking");
        progress.set_message("documents...");
        let results = super::parallel::related_all_with_progress(catalog, &options, &progress)?;
        progress.finish_with_message(format!("ranked {} documents", results.len()));
        results
    };

    #[cfg(not(feature = "parallel"))]
    let results = super::parallel::related_all(catalog, &options)?;

    let export = RelatedExport::from_results(&options, &results);
    let path = export.write_to(output_dir)?;
    let links = export.related.values().map(Vec::len).sum();

    tracing::info!(
        path = %path.display(),
        documents = results.len(),
        links,
        mode = %options.mode,
        limit = options.limit,
        "related lists written"
    );

    Ok(BuildSummary {
        path,
        documents: results.len(),
        links,
        options,
    })
}
