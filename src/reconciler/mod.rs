//! Recursive source → destination reconciliation
//!
//! One pass walks the source tree depth-first. At each level it:
//!
//! 1. creates the destination directory if missing
//! 2. lists both sides one level deep
//! 3. copies files that are missing or stale in the destination
//! 4. deletes destination files absent from the source
//! 5. recurses into every source subdirectory
//! 6. deletes destination directories absent from the source
//!
//! The first error ends the whole pass. It is logged once and returned in
//! [`PassOutcome::Aborted`]; whatever was done before it stays done.

use crate::diff::generate_level_plan;
use crate::executor::execute_action;
use crate::logging::LogSink;
use crate::scanner::list_dir;
use crate::types::{MirrorError, PassOutcome, PassStats, SyncAction, SyncEvent, SyncPair};
use std::path::Path;
use std::time::Instant;

/// Runs reconciliation passes, reporting to a log sink
pub struct Reconciler<'a> {
    sink: &'a dyn LogSink,
}

impl<'a> Reconciler<'a> {
    pub fn new(sink: &'a dyn LogSink) -> Self {
        Self { sink }
    }

    /// Run one full pass from `source` onto `destination`
    pub fn reconcile(&self, source: &Path, destination: &Path) -> PassOutcome {
        let started = Instant::now();
        let mut stats = PassStats::default();

        let result = self.reconcile_pair(&SyncPair::new(source, destination), &mut stats);

        match result {
            Ok(()) => {
                tracing::debug!(
                    copied = stats.files_copied,
                    deleted = stats.files_deleted,
                    dirs_deleted = stats.dirs_deleted,
                    dirs_visited = stats.dirs_visited,
                    elapsed = ?started.elapsed(),
                    "pass completed"
                );
                PassOutcome::Completed(stats)
            }
            Err(error) => {
                self.sink.record(&SyncEvent::Error {
                    message: error.to_string(),
                });
                tracing::debug!(
                    copied = stats.files_copied,
                    deleted = stats.files_deleted,
                    elapsed = ?started.elapsed(),
                    error = %error,
                    "pass aborted"
                );
                PassOutcome::Aborted { stats, error }
            }
        }
    }

    fn reconcile_pair(&self, pair: &SyncPair, stats: &mut PassStats) -> Result<(), MirrorError> {
        self.apply(&SyncAction::Descend(pair.clone()), stats)?;

        let src = list_dir(&pair.source)?;
        let dest = list_dir(&pair.destination)?;

        let plan = generate_level_plan(pair, &src, &dest);
        if plan.has_changes() {
            tracing::trace!(
                dir = %pair.destination.display(),
                copies = plan.stats.copy_count,
                updates = plan.stats.update_count,
                deletes = plan.stats.delete_count,
                dir_deletes = plan.stats.delete_dir_count,
                "level planned"
            );
        }

        for action in &plan.actions {
            match action {
                SyncAction::Descend(child) => self.reconcile_pair(child, stats)?,
                action => self.apply(action, stats)?,
            }
        }

        Ok(())
    }

    fn apply(&self, action: &SyncAction, stats: &mut PassStats) -> Result<(), MirrorError> {
        tracing::trace!(action = action.action_name(), "applying");
        if let Some(event) = execute_action(action)? {
            self.sink.record(&event);
        }
        stats.record(action);
        Ok(())
    }
}
