pub mod json_config;
pub mod manifest;

use crate::ops::{ChangePolicy, VersionEdit};
use colored::Colorize;
use std::path::Path;

/// Prints the confirmation line for a finished (or previewed) edit.
fn report(path: &Path, edit: &VersionEdit, new_version: &str, policy: ChangePolicy, dry_run: bool) {
    if dry_run {
        match policy {
            ChangePolicy::RejectUnchanged => println!(
                "{} {} → {} in {}",
                "Would update version".yellow().bold(),
                edit.previous,
                new_version,
                path.display()
            ),
            ChangePolicy::Overwrite => println!(
                "{} {} in {}",
                "Would set version to".yellow().bold(),
                new_version,
                path.display()
            ),
        }
        return;
    }

    match policy {
        ChangePolicy::RejectUnchanged => println!(
            "{} {} → {}",
            "✓ Updated version".green().bold(),
            edit.previous.yellow(),
            new_version.green().bold()
        ),
        ChangePolicy::Overwrite => println!(
            "{} {}",
            "✓ Version updated successfully to".green().bold(),
            new_version.green().bold()
        ),
    }
}
