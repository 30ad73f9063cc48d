//! Post-edit verification of a rewritten manifest.
//!
//! The rewrite itself is line-based. When the manifest was valid TOML to
//! begin with, the result is parsed again with `toml_edit` to make sure it
//! still is and that the section now holds the requested version.

use crate::error::{Result, VersionError};
use toml_edit::{DocumentMut, Item};

/// Confirms that `updated` still parses and has `version = new_version`
/// under `section`.
///
/// Skipped when `original` is not valid TOML, or when the section name is
/// not a plain dotted path that `toml_edit` can resolve.
pub fn confirm_manifest_version(
    original: &str,
    updated: &str,
    section: &str,
    new_version: &str,
) -> Result<()> {
    if let Err(e) = original.parse::<DocumentMut>() {
        log::debug!("Manifest is not valid TOML, skipping verification: {}", e);
        return Ok(());
    }

    let doc = updated.parse::<DocumentMut>().map_err(|e| {
        VersionError::VerificationFailed(format!("edited manifest is not valid TOML: {}", e))
    })?;

    let Some(table) = lookup_section(doc.as_item(), section) else {
        log::debug!("Section [{}] not resolvable, skipping verification", section);
        return Ok(());
    };

    match table.get("version").and_then(Item::as_str) {
        Some(found) if found == new_version => {
            log::debug!("Verified [{}] version = \"{}\"", section, found);
            Ok(())
        }
        Some(found) => Err(VersionError::VerificationFailed(format!(
            "[{}] version is \"{}\", expected \"{}\"",
            section, found, new_version
        ))),
        None => Err(VersionError::VerificationFailed(format!(
            "[{}] has no string version entry",
            section
        ))),
    }
}

fn lookup_section<'a>(root: &'a Item, section: &str) -> Option<&'a Item> {
    section
        .split('.')
        .map(str::trim)
        .try_fold(root, |item, key| item.get(key))
}
