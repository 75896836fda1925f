// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get sorted.
//!
//! The order is total, so the same inputs always come back in the same order
//! regardless of how the candidate pool was shuffled on the way in.
//!
//! 1. **Score** - higher wins
//! 2. **Published at** - more recent wins
//! 3. **Id** - lexicographic, final tiebreaker

use crate::types::ScoredItem;
use std::cmp::Ordering;

/// Compare two scored candidates for ranking. `Less` means `a` ranks first.
///
/// Scores use `total_cmp`, so the comparator is a proper total order even if
/// a NaN ever sneaks in (it can't from [`super::score`], but `sort_by` must
/// never see an inconsistent comparator).
///
/// # Example
///
/// ```ignore
/// // Same score, newer post first
/// let newer = ScoredItem { item: make_item("a", "web", &[], 200), score: 0.5 };
/// let older = ScoredItem { item: make_item("b", "web", &[], 100), score: 0.5 };
///
/// assert_eq!(compare_scored(&newer, &older), Ordering::Less);
/// ```
pub fn compare_scored(a: &ScoredItem, b: &ScoredItem) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.item.published_at.cmp(&a.item.published_at))
        .then_with(|| a.item.id.cmp(&b.item.id))
}

/// Sort by [`compare_scored`] and keep the first `limit`.
///
/// For pools much larger than `limit` this partitions first so only the
/// survivors get fully sorted.
pub fn top_k(mut scored: Vec<ScoredItem>, limit: usize) -> Vec<ScoredItem> {
    if limit == 0 {
        return Vec::new();
    }
    if scored.len() > limit {
        scored.select_nth_unstable_by(limit - 1, compare_scored);
        scored.truncate(limit);
    }
    scored.sort_by(compare_scored);
    scored
}
