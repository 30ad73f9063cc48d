//! Input rules and post-edit checks.

pub mod manifest;
pub mod rules;

pub use manifest::confirm_manifest_version;
pub use rules::{validate_quoted_version, validate_section_name, validate_version};
