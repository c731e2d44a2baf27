//! Per-level SyncAction plan generation

use crate::diff::compare_files;
use crate::types::{CopyReason, DirListing, SyncAction, SyncPair};

/// Actions for one directory level, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffPlan {
    /// All actions in execution order
    pub actions: Vec<SyncAction>,

    /// Statistics
    pub stats: PlanStats,
}

/// Counters for a level plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanStats {
    pub copy_count: usize,
    pub update_count: usize,
    pub delete_count: usize,
    pub descend_count: usize,
    pub delete_dir_count: usize,
}

impl DiffPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an action and update statistics
    pub fn add_action(&mut self, action: SyncAction) {
        match &action {
            SyncAction::Copy {
                reason: CopyReason::Missing,
                ..
            } => self.stats.copy_count += 1,
            SyncAction::Copy {
                reason: CopyReason::Newer,
                ..
            } => self.stats.update_count += 1,
            SyncAction::DeleteFile(_) => self.stats.delete_count += 1,
            SyncAction::Descend(_) => self.stats.descend_count += 1,
            SyncAction::DeleteDir(_) => self.stats.delete_dir_count += 1,
        }
        self.actions.push(action);
    }

    /// Check whether this level changes anything besides descending
    pub fn has_changes(&self) -> bool {
        self.actions
            .iter()
            .any(|action| !matches!(action, SyncAction::Descend(_)))
    }
}

/// Plan one directory level
///
/// The plan is ordered in four phases, each in name order:
///
/// 1. copies of source files that are missing or stale in the destination
/// 2. deletions of destination files with no same-named source file
/// 3. descents into every source subdirectory
/// 4. deletions of destination directories with no same-named source directory
///
/// Files are fully handled at a level before any subdirectory is touched.
///
/// # Example
/// ```
/// use dirmirror::diff::generate_level_plan;
/// use dirmirror::types::{DirListing, FileEntry, SyncPair};
/// use std::path::PathBuf;
/// use std::time::{Duration, UNIX_EPOCH};
///
/// let pair = SyncPair::new("src", "dst");
/// let mut src = DirListing::new(PathBuf::from("src"));
/// src.insert_file(FileEntry::new(
///     PathBuf::from("src/new.txt"),
///     UNIX_EPOCH + Duration::from_secs(1_000),
/// ));
/// let dest = DirListing::new(PathBuf::from("dst"));
///
/// let plan = generate_level_plan(&pair, &src, &dest);
/// assert_eq!(plan.stats.copy_count, 1);
/// ```
pub fn generate_level_plan(pair: &SyncPair, src: &DirListing, dest: &DirListing) -> DiffPlan {
    let mut plan = DiffPlan::new();

    for (name, src_entry) in &src.files {
        if let Some(reason) = compare_files(src_entry, dest.file(name)) {
            plan.add_action(SyncAction::Copy {
                source: src_entry.path.clone(),
                destination: pair.destination.join(name),
                reason,
            });
        }
    }

    for (name, dest_entry) in &dest.files {
        if src.file(name).is_none() {
            plan.add_action(SyncAction::DeleteFile(dest_entry.path.clone()));
        }
    }

    for name in &src.dirs {
        plan.add_action(SyncAction::Descend(pair.child(name)));
    }

    for name in &dest.dirs {
        if !src.has_dir(name) {
            plan.add_action(SyncAction::DeleteDir(dest.child_path(name)));
        }
    }

    plan
}
