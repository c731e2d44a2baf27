//! SyncAction - Actions determined by the diff engine

use super::SyncPair;
use std::path::PathBuf;

/// Why a file is being copied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyReason {
    /// No same-named file in the destination
    Missing,

    /// Source modified strictly later than the destination copy
    Newer,
}

/// Sync action determined by diff engine for one directory level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Copy a source file over its destination path
    Copy {
        source: PathBuf,
        destination: PathBuf,
        reason: CopyReason,
    },

    /// Delete a destination file with no source counterpart
    DeleteFile(PathBuf),

    /// Reconcile a same-named subdirectory pair
    Descend(SyncPair),

    /// Delete a destination directory tree with no source counterpart
    DeleteDir(PathBuf),
}

impl SyncAction {
    /// Short label for diagnostics
    pub fn action_name(&self) -> &'static str {
        match self {
            SyncAction::Copy {
                reason: CopyReason::Missing,
                ..
            } => "Copy",
            SyncAction::Copy {
                reason: CopyReason::Newer,
                ..
            } => "Update",
            SyncAction::DeleteFile(_) => "Delete",
            SyncAction::Descend(_) => "Descend",
            SyncAction::DeleteDir(_) => "DeleteDir",
        }
    }
}
