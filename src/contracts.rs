// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for ranking results.
//!
//! Debug-mode assertions that every result leaving the ranker satisfies its
//! invariants. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail **at the ranker**, not three layers up in a template
//! 3. Mirror the testable properties the property tests check
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function           | Property                                     |
//! |-----------------------------|----------------------------------------------|
//! | `check_result_well_formed`  | len ≤ limit, no self-match, scores in [0, 1] |
//! | `check_result_well_formed`  | ordered by `compare_scored`                  |
//! | `check_mode_respected`      | every item qualifies under the result's mode |
//!
//! # Usage
//!
//! ```ignore
//! use kinship::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_result_well_formed(&result, &reference, limit);
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static assertion that every score stays inside `[0, MAX_SCORE]`.
///
/// Tag scores are a ratio bounded by 1 by construction, so the only constant
/// that can break the bound is the category bonus.
const _: () = {
    assert!(CATEGORY_BONUS > 0.0);
    assert!(CATEGORY_BONUS <= MAX_SCORE);
};

use crate::scoring::ranking::compare_scored;
use crate::scoring::{tag_score, CATEGORY_BONUS, MAX_SCORE};
use crate::types::{ContentItem, RankMode, SimilarityResult};
use std::cmp::Ordering;

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check the structural invariants of a ranking result.
///
/// # Panics (debug builds only)
/// - more than `limit` items
/// - the reference appears in its own result
/// - a score outside `[0, 1]`
/// - adjacent items out of order under [`compare_scored`]
#[inline]
pub fn check_result_well_formed(result: &SimilarityResult, reference: &ContentItem, limit: usize) {
    debug_assert!(
        result.items.len() <= limit,
        "Contract violation: result has {} items but limit is {}",
        result.items.len(),
        limit
    );

    debug_assert_eq!(
        result.reference_id, reference.id,
        "Contract violation: result reference_id does not match the reference"
    );

    for (i, scored) in result.items.iter().enumerate() {
        debug_assert!(
            scored.item.id != reference.id,
            "Contract violation: reference '{}' appears in its own result at position {}",
            reference.id,
            i
        );
        debug_assert!(
            (0.0..=MAX_SCORE).contains(&scored.score),
            "Contract violation: score {} at position {} outside [0, {}]",
            scored.score,
            i,
            MAX_SCORE
        );
    }

    for i in 1..result.items.len() {
        debug_assert!(
            compare_scored(&result.items[i - 1], &result.items[i]) != Ordering::Greater,
            "Contract violation: result not ordered at position {} ('{}' vs '{}')",
            i,
            result.items[i - 1].item.id,
            result.items[i].item.id
        );
    }
}

/// Check that every item in the result qualifies under the result's mode.
///
/// # Panics (debug builds only)
/// - `tag`: an item with no shared tags
/// - `category`: an item from another category
/// - `mixed`: an item with neither shared tags nor the same category
#[inline]
pub fn check_mode_respected(result: &SimilarityResult, reference: &ContentItem) {
    for scored in &result.items {
        let shares_tags = tag_score(reference, &scored.item) > 0.0;
        let same_category = scored.item.category == reference.category;
        match result.mode {
            RankMode::Tag => debug_assert!(
                shares_tags,
                "Contract violation: tag mode returned '{}' with no shared tags",
                scored.item.id
            ),
            RankMode::Category => debug_assert!(
                same_category,
                "Contract violation: category mode returned '{}' from category '{}'",
                scored.item.id,
                scored.item.category
            ),
            RankMode::Mixed => debug_assert!(
                shares_tags || same_category,
                "Contract violation: mixed mode returned unrelated item '{}'",
                scored.item.id
            ),
        }
    }
}
