// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! The ranker has exactly one failure mode: a bad argument. Empty pools and
//! "nothing matched" are ordinary empty results, not errors. Everything that
//! can go wrong around the ranker (missing ids, unreadable files) belongs to
//! the catalog and lives in [`CatalogError`].

use std::path::PathBuf;

/// The ranker's only error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankError {
    /// `limit` was not positive or `mode` was not recognized.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },
}

impl RankError {
    pub(crate) fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        RankError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading or querying a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("content item '{0}' not found")]
    NotFound(String),

    #[error("duplicate content item id '{0}'")]
    DuplicateId(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize related lists: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("unsupported manifest version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error(transparent)]
    Rank(#[from] RankError),
}
