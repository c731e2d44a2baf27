//! PassOutcome - tagged result of one reconciliation pass

use super::{MirrorError, SyncAction};

/// Counters accumulated during one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Files copied (new or updated)
    pub files_copied: usize,
    /// Destination files deleted
    pub files_deleted: usize,
    /// Destination directory trees deleted
    pub dirs_deleted: usize,
    /// Directory pairs reconciled, including the root pair
    pub dirs_visited: usize,
}

impl PassStats {
    /// Total number of filesystem changes made
    pub fn changes(&self) -> usize {
        self.files_copied + self.files_deleted + self.dirs_deleted
    }

    /// Count an action that has been carried out
    pub fn record(&mut self, action: &SyncAction) {
        match action {
            SyncAction::Copy { .. } => self.files_copied += 1,
            SyncAction::DeleteFile(_) => self.files_deleted += 1,
            SyncAction::DeleteDir(_) => self.dirs_deleted += 1,
            SyncAction::Descend(_) => self.dirs_visited += 1,
        }
    }
}

/// Result of one pass.
///
/// A pass stops at the first error; `Aborted` carries the counters for the
/// work done before the failure, which is left in place.
#[derive(Debug)]
pub enum PassOutcome {
    Completed(PassStats),
    Aborted { stats: PassStats, error: MirrorError },
}

impl PassOutcome {
    pub fn stats(&self) -> &PassStats {
        match self {
            PassOutcome::Completed(stats) => stats,
            PassOutcome::Aborted { stats, .. } => stats,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, PassOutcome::Completed(_))
    }

    pub fn error(&self) -> Option<&MirrorError> {
        match self {
            PassOutcome::Completed(_) => None,
            PassOutcome::Aborted { error, .. } => Some(error),
        }
    }
}
