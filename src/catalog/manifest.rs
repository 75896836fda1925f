use serde::Deserialize;

use crate::error::RankError;
use crate::types::{validate_limit, RankOptions};

/// The only manifest version this crate reads.
pub const MANIFEST_VERSION: u32 = 1;

/// `manifest.json` at the root of a catalog directory.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CatalogManifest {
    pub version: u32,
    /// Document files, relative to the manifest's directory.
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub defaults: RankDefaults,
    /// Lowercase, strip diacritics and collapse whitespace in tags and
    /// categories at load time.
    #[serde(default)]
    pub normalize_tags: bool,
}

/// Ranking defaults from the manifest. Kept untyped until resolved so a bad
/// value surfaces as the same `InvalidArgument` a bad CLI flag would.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RankDefaults {
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub mode: Option<String>,
}

impl RankDefaults {
    /// Resolve options: override > manifest default > built-in default.
    pub fn resolve(
        &self,
        limit_override: Option<i64>,
        mode_override: Option<&str>,
    ) -> Result<RankOptions, RankError> {
        let builtin = RankOptions::default();

        let limit = match limit_override.or(self.limit) {
            Some(limit) => validate_limit(limit)?,
            None => builtin.limit,
        };
        let mode = match mode_override.or(self.mode.as_deref()) {
            Some(mode) => mode.parse()?,
            None => builtin.mode,
        };

        RankOptions::new(limit, mode)
    }
}
