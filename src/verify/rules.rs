//! Validation rules for command-line values.
//!
//! Pure functions with no I/O or side effects. These only guard against
//! values that would corrupt the file being edited; version syntax itself
//! is not checked.

use crate::error::{Result, VersionError};

/// Checks a version for any target format.
///
/// ## Rules
/// - Not empty
/// - No control characters (including newlines)
pub fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() {
        return Err(VersionError::InvalidVersion(
            version.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    reject_chars(version, char::is_control)
}

/// Checks that a version can be written between double quotes verbatim,
/// as the manifest rewrite does not escape anything.
///
/// Adds to [`validate_version`]: no `"` or `\`.
pub fn validate_quoted_version(version: &str) -> Result<()> {
    validate_version(version)?;
    reject_chars(version, |ch| ch == '"' || ch == '\\')
}

fn reject_chars(version: &str, rejected: impl Fn(char) -> bool) -> Result<()> {
    match version.chars().enumerate().find(|&(_, ch)| rejected(ch)) {
        Some((idx, ch)) => Err(VersionError::InvalidVersion(
            version.to_string(),
            format!("character {:?} at position {} is not allowed", ch, idx),
        )),
        None => Ok(()),
    }
}

/// Checks a section name given as `package` or `workspace.package`.
pub fn validate_section_name(section: &str) -> Result<()> {
    let reason = if section.trim().is_empty() {
        Some("cannot be empty")
    } else if section.contains(['[', ']']) {
        Some("give the name without brackets")
    } else if section.chars().any(char::is_control) {
        Some("cannot contain control characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(VersionError::InvalidSection(
            section.to_string(),
            reason.to_string(),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_versions() {
        assert!(validate_version("1.0.0").is_ok());
        assert!(validate_version("1.0.0-rc.1+build.5").is_ok());
        assert!(validate_version("v2").is_ok());
        assert!(validate_version("not semver at all").is_ok());
    }

    #[test]
    fn test_validate_invalid_versions() {
        assert!(validate_version("").is_err());
        assert!(validate_version("1.0\n").is_err());
        assert!(validate_version("1.0\t1").is_err());
    }

    #[test]
    fn test_quotes_allowed_unless_quoted_verbatim() {
        assert!(validate_version("1.0\"").is_ok());
        assert!(validate_version("1.0\\0").is_ok());

        assert!(validate_quoted_version("1.0.0").is_ok());
        assert!(validate_quoted_version("").is_err());
        assert!(validate_quoted_version("1.0\n").is_err());
        assert!(validate_quoted_version("1.0\"").is_err());
        assert!(validate_quoted_version("1.0\\0").is_err());
    }

    #[test]
    fn test_invalid_version_message() {
        let err = validate_quoted_version("1\"0").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Invalid version '1\"0'"));
        assert!(message.ends_with("at position 1 is not allowed"));
    }

    #[test]
    fn test_validate_sections() {
        assert!(validate_section_name("package").is_ok());
        assert!(validate_section_name("workspace.package").is_ok());
        assert!(validate_section_name("").is_err());
        assert!(validate_section_name("  ").is_err());
        assert!(validate_section_name("[package]").is_err());
        assert!(validate_section_name("pack\nage").is_err());
    }
}
