// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind related-content scoring.
//!
//! Two signals, both bounded to `[0, 1]`:
//!
//! ```text
//! tag_score(a, b)      = |tags(a) ∩ tags(b)| / max(|tags(a)|, |tags(b)|)
//! category_score(a, b) = CATEGORY_BONUS if category(a) == category(b) else 0
//! ```
//!
//! Each mode decides which signals count and when a candidate is dropped:
//!
//! | Mode     | Score                              | Excluded when            |
//! |----------|------------------------------------|--------------------------|
//! | tag      | `tag_score`                        | `tag_score == 0`         |
//! | category | `CATEGORY_BONUS`                   | categories differ        |
//! | mixed    | `max(tag_score, category_score)`   | both signals are zero    |
//!
//! Mixed mode takes the max rather than the sum. A candidate sharing half its
//! tags and the category scores 0.5, the same as a category-only match, and
//! the tie-break decides between them.

use crate::types::{ContentItem, RankMode};

/// Flat score credited for an exact category match.
pub const CATEGORY_BONUS: f64 = 0.5;

/// Upper bound of every score produced by this module.
pub const MAX_SCORE: f64 = 1.0;

/// Normalized tag overlap in `[0, 1]`.
///
/// Divides by the larger tag set so that a post with one shared tag out of
/// ten doesn't look as related as a post whose single tag matches.
/// Returns 0 when either side has no tags.
pub fn tag_score(a: &ContentItem, b: &ContentItem) -> f64 {
    let denom = a.tags.len().max(b.tags.len());
    if a.tags.is_empty() || b.tags.is_empty() {
        return 0.0;
    }
    a.shared_tags(b) as f64 / denom as f64
}

/// [`CATEGORY_BONUS`] on exact category match, else 0.
pub fn category_score(a: &ContentItem, b: &ContentItem) -> f64 {
    if a.category == b.category {
        CATEGORY_BONUS
    } else {
        0.0
    }
}

/// Score `candidate` against `reference` under `mode`.
///
/// `None` means the candidate doesn't qualify at all, which is different from
/// a low score: excluded candidates never reach the result list.
pub fn score(reference: &ContentItem, candidate: &ContentItem, mode: RankMode) -> Option<f64> {
    match mode {
        RankMode::Tag => {
            let tags = tag_score(reference, candidate);
            (tags > 0.0).then_some(tags)
        }
        RankMode::Category => {
            (reference.category == candidate.category).then_some(CATEGORY_BONUS)
        }
        RankMode::Mixed => {
            let tags = tag_score(reference, candidate);
            let category = category_score(reference, candidate);
            let combined = tags.max(category);
            (combined > 0.0).then_some(combined)
        }
    }
}
