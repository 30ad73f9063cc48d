//! Section-scoped rewriting of a `version = "..."` line.
//!
//! The manifest is treated as plain lines rather than parsed, so comments,
//! spacing and ordering of everything but the edited line survive untouched.

use super::{ChangePolicy, VersionEdit};
use crate::error::{Result, VersionError};
use regex::Regex;

/// Section searched when none is given.
pub const DEFAULT_SECTION: &str = "package";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionState {
    Outside,
    Inside,
}

impl SectionState {
    /// Every header closes the current section; only the target header
    /// opens it again.
    fn advance(self, trimmed: &str, header: &str) -> Self {
        if !trimmed.starts_with('[') {
            return self;
        }
        if trimmed == header {
            SectionState::Inside
        } else {
            SectionState::Outside
        }
    }
}

/// Replaces the first `version = "..."` line inside `[section]`.
///
/// The rewritten line keeps its indentation and line terminator. All other
/// lines are copied verbatim.
///
/// # Errors
///
/// - [`VersionError::Unchanged`] if `policy` rejects an unchanged version
/// - [`VersionError::MissingField`] if the section or its version line is absent
pub fn rewrite_manifest_version(
    content: &str,
    section: &str,
    new_version: &str,
    policy: ChangePolicy,
) -> Result<VersionEdit> {
    let header = format!("[{}]", section);
    let pattern = Regex::new(r#"^version\s*=\s*"(.*)"$"#)?;

    let mut state = SectionState::Outside;
    let mut found: Option<(usize, String)> = None;
    let mut output = String::with_capacity(content.len() + new_version.len());

    for (idx, line) in content.split_inclusive('\n').enumerate() {
        let (body, ending) = split_line_ending(line);
        let trimmed = body.trim();
        state = state.advance(trimmed, &header);

        if found.is_none() && state == SectionState::Inside {
            if let Some(caps) = pattern.captures(trimmed) {
                let previous = caps[1].to_string();
                log::debug!("Found version \"{}\" on line {}", previous, idx + 1);
                policy.check(&previous, new_version)?;

                let indent = &body[..body.len() - body.trim_start().len()];
                output.push_str(indent);
                output.push_str(&format!("version = \"{}\"", new_version));
                output.push_str(ending);
                found = Some((idx + 1, previous));
                continue;
            }
        }

        output.push_str(line);
    }

    let (line, previous) = found.ok_or_else(|| VersionError::MissingField {
        section: section.to_string(),
    })?;

    Ok(VersionEdit {
        content: output,
        previous,
        line: Some(line),
    })
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}
