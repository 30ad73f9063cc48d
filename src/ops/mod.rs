//! Version rewriting for manifests and JSON configs.
//!
//! Everything here works on document text already in memory and returns the
//! rewritten text. Reading and writing files is left to [`crate::fs`].

mod json_config;
mod manifest;

pub use json_config::{DEFAULT_VERSION, rewrite_config_version};
pub use manifest::{DEFAULT_SECTION, rewrite_manifest_version};

use crate::error::{Result, VersionError};

/// What to do when the requested version is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangePolicy {
    /// Fail with [`VersionError::Unchanged`].
    RejectUnchanged,
    /// Write the value regardless.
    Overwrite,
}

impl ChangePolicy {
    pub(crate) fn check(self, current: &str, requested: &str) -> Result<()> {
        if self == ChangePolicy::RejectUnchanged && current == requested {
            return Err(VersionError::Unchanged(requested.to_string()));
        }
        Ok(())
    }
}

/// A successful rewrite of one version field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEdit {
    /// Full document text with the new version in place.
    pub content: String,
    /// Version held before the edit.
    pub previous: String,
    /// 1-based line that was rewritten, for line-oriented formats.
    pub line: Option<usize>,
}
