// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The relevance ranker.
//!
//! Pure and synchronous: it reads the reference and the candidates it is
//! handed, allocates a scratch vector, and returns. No lookups, no I/O, no
//! logging. Finding the reference (and reporting it missing) is the caller's
//! job; see [`crate::Catalog::related`].

use crate::contracts::{check_mode_respected, check_result_well_formed};
use crate::error::RankError;
use crate::scoring::{ranking::top_k, score};
use crate::types::{ContentItem, RankMode, RankOptions, ScoredItem, SimilarityResult};

/// Rank `candidates` by similarity to `reference`.
///
/// Returns at most `limit` items, best first. Candidates that don't qualify
/// under `mode` are dropped, and so is any candidate carrying the reference's
/// own id. An empty pool gives an empty result, not an error.
///
/// Fails with [`RankError::InvalidArgument`] when `limit == 0`, before any
/// scoring happens.
pub fn rank<'a, I>(
    reference: &ContentItem,
    candidates: I,
    limit: usize,
    mode: RankMode,
) -> Result<SimilarityResult, RankError>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let options = RankOptions::new(limit, mode)?;
    Ok(rank_validated(reference, candidates, &options))
}

/// [`rank`] with bundled options.
pub fn rank_with<'a, I>(
    reference: &ContentItem,
    candidates: I,
    options: &RankOptions,
) -> Result<SimilarityResult, RankError>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    // RankOptions has public fields, so a zero limit can still get here.
    let options = RankOptions::new(options.limit, options.mode)?;
    Ok(rank_validated(reference, candidates, &options))
}

fn rank_validated<'a, I>(
    reference: &ContentItem,
    candidates: I,
    options: &RankOptions,
) -> SimilarityResult
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let scored: Vec<ScoredItem> = candidates
        .into_iter()
        .filter(|candidate| candidate.id != reference.id)
        .filter_map(|candidate| {
            score(reference, candidate, options.mode).map(|score| ScoredItem {
                item: candidate.clone(),
                score,
            })
        })
        .collect();

    let result = SimilarityResult {
        reference_id: reference.id.clone(),
        mode: options.mode,
        items: top_k(scored, options.limit),
    };

    check_result_well_formed(&result, reference, options.limit);
    check_mode_respected(&result, reference);

    result
}
