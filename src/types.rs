// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types for related-content ranking.
//!
//! A [`ContentItem`] is the only thing the ranker looks at: an id, a category,
//! a tag set, and a publication time. Everything else a blog post carries
//! (title, body, href) lives outside the ranker, in the catalog layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::RankError;

/// Default number of related items returned per reference.
pub const DEFAULT_LIMIT: usize = 3;

/// A single piece of content, as seen by the ranker.
///
/// Tags are an ordered set: duplicates collapse on construction and iteration
/// order is stable, which keeps scoring deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub category: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub published_at: DateTime<Utc>,
}

impl ContentItem {
    pub fn new<I, S>(
        id: impl Into<String>,
        category: impl Into<String>,
        tags: I,
        published_at: DateTime<Utc>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            category: category.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            published_at,
        }
    }

    /// Number of tags shared with `other`.
    pub fn shared_tags(&self, other: &ContentItem) -> usize {
        // Walk the smaller set, probe the larger one.
        let (small, large) = if self.tags.len() <= other.tags.len() {
            (&self.tags, &other.tags)
        } else {
            (&other.tags, &self.tags)
        };
        small.iter().filter(|tag| large.contains(*tag)).count()
    }
}

/// Which similarity signal drives the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMode {
    /// Normalized tag overlap only.
    Tag,
    /// Exact category match only, flat score.
    Category,
    /// The stronger of the two signals per candidate.
    #[default]
    Mixed,
}

impl RankMode {
    pub const ALL: [RankMode; 3] = [RankMode::Tag, RankMode::Category, RankMode::Mixed];

    pub fn as_str(&self) -> &'static str {
        match self {
            RankMode::Tag => "tag",
            RankMode::Category => "category",
            RankMode::Mixed => "mixed",
        }
    }
}

impl fmt::Display for RankMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankMode {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tag" => Ok(RankMode::Tag),
            "category" => Ok(RankMode::Category),
            "mixed" => Ok(RankMode::Mixed),
            other => Err(RankError::invalid(
                "mode",
                format!("'{}' is not one of tag, category, mixed", other),
            )),
        }
    }
}

/// Validated ranking parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankOptions {
    pub limit: usize,
    pub mode: RankMode,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            mode: RankMode::Mixed,
        }
    }
}

impl RankOptions {
    pub fn new(limit: usize, mode: RankMode) -> Result<Self, RankError> {
        if limit == 0 {
            return Err(RankError::invalid("limit", "must be a positive integer"));
        }
        Ok(Self { limit, mode })
    }

    /// Validate options coming from an untyped surface (query string, CLI, JSON).
    pub fn parse(limit: i64, mode: &str) -> Result<Self, RankError> {
        let limit = validate_limit(limit)?;
        let mode = mode.parse()?;
        Ok(Self { limit, mode })
    }
}

/// Accept a signed limit and reject zero and negatives.
pub fn validate_limit(limit: i64) -> Result<usize, RankError> {
    if limit <= 0 {
        return Err(RankError::invalid(
            "limit",
            format!("must be a positive integer, got {}", limit),
        ));
    }
    usize::try_from(limit).map_err(|_| RankError::invalid("limit", "does not fit in usize"))
}

/// A candidate together with its similarity to the reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    pub item: ContentItem,
    pub score: f64,
}

/// Ranked related items for one reference item.
///
/// Ordered by score descending, then by `published_at` descending, then by
/// id ascending. Never contains the reference itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    pub reference_id: String,
    pub mode: RankMode,
    pub items: Vec<ScoredItem>,
}

impl SimilarityResult {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids of the ranked items, in order.
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|s| s.item.id.as_str()).collect()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.items.iter().map(|s| s.score).collect()
    }
}
