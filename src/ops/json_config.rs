//! Top-level `"version"` rewriting for JSON application configs.

use super::{ChangePolicy, VersionEdit};
use crate::error::{Result, VersionError};
use serde_json::Value;

/// Version assumed when the config has no `"version"` key.
pub const DEFAULT_VERSION: &str = "0.0.0";

const VERSION_KEY: &str = "version";

/// Sets the top-level `"version"` key of a JSON object.
///
/// Output is pretty-printed with two-space indentation. Key order is kept,
/// and a missing key is appended after the existing ones. Numbers are
/// written back with their original digits. A trailing newline
/// is emitted only if the input had one.
pub fn rewrite_config_version(
    content: &str,
    new_version: &str,
    policy: ChangePolicy,
) -> Result<VersionEdit> {
    let mut doc: Value = serde_json::from_str(content)?;
    let config = doc.as_object_mut().ok_or_else(|| {
        VersionError::InvalidDocument("expected a JSON object at the top level".to_string())
    })?;

    let previous = match config.get(VERSION_KEY) {
        Some(Value::String(version)) => version.clone(),
        Some(other) => {
            return Err(VersionError::InvalidDocument(format!(
                "\"{}\" must be a string, found {}",
                VERSION_KEY, other
            )));
        }
        None => {
            log::debug!("No \"{}\" key, assuming {}", VERSION_KEY, DEFAULT_VERSION);
            DEFAULT_VERSION.to_string()
        }
    };

    policy.check(&previous, new_version)?;
    config.insert(VERSION_KEY.to_string(), Value::from(new_version));

    let mut rendered = serde_json::to_string_pretty(&doc)?;
    if content.ends_with('\n') {
        rendered.push('\n');
    }

    Ok(VersionEdit {
        content: rendered,
        previous,
        line: None,
    })
}
