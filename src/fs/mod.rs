//! File system access for the version tools.
//!
//! Documents are read whole, rewritten in memory, and written back once
//! through a [`StagedWrite`].

mod staged;

pub use staged::StagedWrite;

use crate::error::{IoAction, Result, VersionError};
use std::io;
use std::path::Path;

/// Reads a UTF-8 document, mapping a missing file to
/// [`VersionError::FileNotFound`].
pub fn read_document(path: &Path) -> Result<String> {
    log::debug!("Reading {}", path.display());

    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => VersionError::FileNotFound(path.to_path_buf()),
        _ => VersionError::Io {
            action: IoAction::Read,
            path: path.to_path_buf(),
            source: e,
        },
    })
}
