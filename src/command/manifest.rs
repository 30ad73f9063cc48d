use crate::error::Result;
use crate::fs::{StagedWrite, read_document};
use crate::ops::{ChangePolicy, DEFAULT_SECTION, rewrite_manifest_version};
use crate::verify::{confirm_manifest_version, validate_quoted_version, validate_section_name};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ManifestArgs {
    /// Version to write, e.g. 1.2.0
    pub new_version: String,

    /// Path to the manifest (usually Cargo.toml)
    pub file_path: PathBuf,

    /// Section whose `version` entry is rewritten, without brackets
    #[arg(long, value_name = "NAME", default_value = DEFAULT_SECTION)]
    pub section: String,

    /// Show what would change without writing the file
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Print debug logging to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Rewrites the manifest's section version according to `policy`.
pub fn execute(args: ManifestArgs, policy: ChangePolicy) -> Result<()> {
    validate_quoted_version(&args.new_version)?;
    validate_section_name(&args.section)?;

    let original = read_document(&args.file_path)?;
    let edit = rewrite_manifest_version(&original, &args.section, &args.new_version, policy)?;

    if let Some(line) = edit.line {
        log::info!(
            "Rewriting [{}] version on line {} of {}",
            args.section,
            line,
            args.file_path.display()
        );
    }

    confirm_manifest_version(&original, &edit.content, &args.section, &args.new_version)?;

    let mut staged = StagedWrite::new(
        args.file_path.clone(),
        original,
        edit.content.clone(),
        args.dry_run,
    );
    staged.commit()?;

    super::report(
        staged.path(),
        &edit,
        &args.new_version,
        policy,
        args.dry_run,
    );
    Ok(())
}
