// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Related-content ranking by tag and category similarity.
//!
//! Given a reference post and a pool of candidates, return the few most
//! similar posts, best first. Scoring blends normalized tag overlap with a
//! flat category bonus, and the ordering is total, so the same inputs always
//! give the same list.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│  scoring/    │────▶│   rank.rs   │
//! │(ContentItem,│     │ (tag_score,  │     │   (rank,    │
//! │  RankMode)  │     │ compare_...) │     │  rank_with) │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                                                 ▲
//!        ┌────────────────────────────────────────┤
//!        │                                        │
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ inverted.rs │────▶│  catalog/    │     │contracts.rs │
//! │ (TagIndex)  │     │ (Catalog,    │     │ (debug-mode │
//! │             │     │  load, batch)│     │  invariants)│
//! └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! The ranker itself does no I/O and no lookups. The catalog is one caller:
//! it finds the reference by id, prefilters candidates through the tag index,
//! and ranks whole sites in parallel.
//!
//! # Usage
//!
//! ```ignore
//! use kinship::{rank, ContentItem, RankMode};
//!
//! let result = rank(&reference, &candidates, 3, RankMode::Mixed)?;
//! for scored in &result.items {
//!     println!("{} {:.2}", scored.item.id, scored.score);
//! }
//! ```

// Module declarations
pub mod catalog;
pub mod contracts;
mod error;
mod inverted;
mod rank;
pub mod scoring;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use catalog::{Catalog, CatalogManifest, CatalogStats, Document, LoadedCatalog, RankDefaults};
pub use error::{CatalogError, RankError};
pub use inverted::{PostingList, TagIndex};
pub use rank::{rank, rank_with};
pub use scoring::ranking::compare_scored;
pub use scoring::{category_score, score, tag_score, CATEGORY_BONUS, MAX_SCORE};
pub use types::{
    validate_limit, ContentItem, RankMode, RankOptions, ScoredItem, SimilarityResult,
    DEFAULT_LIMIT,
};
pub use utils::normalize;
