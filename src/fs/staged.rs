use crate::error::{IoAction, Result, VersionError};
use std::fs;
use std::path::{Path, PathBuf};

/// A single pending file update.
///
/// Holds both the original and the updated content so a failed write can
/// put the original back.
#[must_use = "StagedWrite must be committed"]
#[derive(Debug)]
pub struct StagedWrite {
    path: PathBuf,
    original: String,
    updated: String,
    dry_run: bool,
    committed: bool,
}

impl StagedWrite {
    pub fn new(path: PathBuf, original: String, updated: String, dry_run: bool) -> Self {
        log::debug!("Staging update for: {}", path.display());
        Self {
            path,
            original,
            updated,
            dry_run,
            committed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_unchanged(&self) -> bool {
        self.original == self.updated
    }

    /// Writes the updated content.
    ///
    /// Does nothing in dry-run mode or when the content is unchanged. A
    /// second call after a successful commit is a no-op.
    pub fn commit(&mut self) -> Result<()> {
        if self.committed {
            log::debug!("Already committed: {}", self.path.display());
            return Ok(());
        }

        if self.dry_run {
            log::info!("Would update: {}", self.path.display());
            self.committed = true;
            return Ok(());
        }

        if self.is_unchanged() {
            log::debug!("File content unchanged, skipping: {}", self.path.display());
            self.committed = true;
            return Ok(());
        }

        if let Err(e) = fs::write(&self.path, &self.updated) {
            log::error!("Failed to write {}: {}", self.path.display(), e);
            self.restore();
            return Err(VersionError::Io {
                action: IoAction::Write,
                path: self.path.clone(),
                source: e,
            });
        }

        log::debug!("Updated: {}", self.path.display());
        self.committed = true;
        Ok(())
    }

    fn restore(&self) {
        if !self.path.is_file() {
            return;
        }

        match fs::write(&self.path, &self.original) {
            Ok(()) => log::warn!("Restored original content of {}", self.path.display()),
            Err(e) => log::error!("Failed to restore {}: {}", self.path.display(), e),
        }
    }
}
