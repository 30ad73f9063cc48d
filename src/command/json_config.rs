use crate::error::Result;
use crate::fs::{StagedWrite, read_document};
use crate::ops::{ChangePolicy, rewrite_config_version};
use crate::verify::validate_version;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct JsonConfigArgs {
    /// Version to write, e.g. 1.2.0
    pub new_version: String,

    /// Path to the JSON config (e.g. tauri.conf.json)
    pub file_path: PathBuf,

    /// Show what would change without writing the file
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Print debug logging to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Rewrites the config's top-level `"version"`, rejecting no-op updates.
pub fn execute(args: JsonConfigArgs) -> Result<()> {
    let policy = ChangePolicy::RejectUnchanged;

    validate_version(&args.new_version)?;

    let original = read_document(&args.file_path)?;
    let edit = rewrite_config_version(&original, &args.new_version, policy)?;
    log::info!(
        "Rewriting version {} → {} in {}",
        edit.previous,
        args.new_version,
        args.file_path.display()
    );

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
