//! Executor module for file operations

pub mod copy;

use crate::types::{MirrorError, SyncAction, SyncEvent};
use std::fs;
use std::path::Path;

pub use copy::copy_file_atomic;

/// Execute one filesystem action and return the event to report, if any
///
/// `Descend` only makes sure the destination directory exists and reports
/// nothing; listing and walking the pair is up to the caller.
pub fn execute_action(action: &SyncAction) -> Result<Option<SyncEvent>, MirrorError> {
    let event = match action {
        SyncAction::Copy {
            source,
            destination,
            ..
        } => {
            copy_file_atomic(source, destination)?;
            SyncEvent::Copied {
                source: source.clone(),
                destination: destination.clone(),
            }
        }
        SyncAction::DeleteFile(path) => {
            delete_file(path)?;
            SyncEvent::Deleted { path: path.clone() }
        }
        SyncAction::DeleteDir(path) => {
            delete_dir(path)?;
            SyncEvent::DeletedDirectory { path: path.clone() }
        }
        SyncAction::Descend(pair) => {
            ensure_dir(&pair.destination)?;
            return Ok(None);
        }
    };

    Ok(Some(event))
}

/// Make sure `path` exists as a directory, creating missing segments
pub fn ensure_dir(path: &Path) -> Result<(), MirrorError> {
    fs::create_dir_all(path).map_err(MirrorError::at("create directory", path))
}

/// Remove a single file
pub fn delete_file(path: &Path) -> Result<(), MirrorError> {
    fs::remove_file(path).map_err(MirrorError::at("delete", path))
}

/// Remove a directory and everything below it
pub fn delete_dir(path: &Path) -> Result<(), MirrorError> {
    fs::remove_dir_all(path).map_err(MirrorError::at("delete directory", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CopyReason, SyncPair};
    use tempfile::TempDir;

    #[test]
    fn test_execute_copy_reports_both_paths() {
        let src = TempDir::new().expect("create src tempdir");
        let dst = TempDir::new().expect("create dst tempdir");
        fs::write(src.path().join("new.txt"), b"new-content").expect("write src new");

        let action = SyncAction::Copy {
            source: src.path().join("new.txt"),
            destination: dst.path().join("new.txt"),
            reason: CopyReason::Missing,
        };

        let event = execute_action(&action).expect("execute copy");

        assert_eq!(
            event,
            Some(SyncEvent::Copied {
                source: src.path().join("new.txt"),
                destination: dst.path().join("new.txt"),
            })
        );
        assert_eq!(
            fs::read(dst.path().join("new.txt")).expect("read dst new"),
            b"new-content"
        );
    }

    #[test]
    fn test_execute_delete_file() {
        let dst = TempDir::new().expect("create dst tempdir");
        let path = dst.path().join("old.txt");
        fs::write(&path, b"to-delete").expect("write dst old");

        let event = execute_action(&SyncAction::DeleteFile(path.clone())).expect("delete");

        assert_eq!(event, Some(SyncEvent::Deleted { path: path.clone() }));
        assert!(!path.exists());
    }

    #[test]
    fn test_execute_delete_dir_removes_tree() {
        let dst = TempDir::new().expect("create dst tempdir");
        let dir = dst.path().join("old");
        fs::create_dir_all(dir.join("deep/deeper")).expect("create tree");
        fs::write(dir.join("deep/deeper/file.txt"), b"x").expect("write nested");

        let event = execute_action(&SyncAction::DeleteDir(dir.clone())).expect("delete dir");

        assert_eq!(
            event,
            Some(SyncEvent::DeletedDirectory { path: dir.clone() })
        );
        assert!(!dir.exists());
    }

    #[test]
    fn test_execute_delete_missing_file_is_error() {
        let dst = TempDir::new().expect("create dst tempdir");
        let result = execute_action(&SyncAction::DeleteFile(dst.path().join("missing.txt")));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_execute_descend_creates_destination_silently() {
        let src = TempDir::new().expect("create src tempdir");
        let dst = TempDir::new().expect("create dst tempdir");
        let pair = SyncPair::new(src.path().join("sub"), dst.path().join("sub/deeper"));

        let event = execute_action(&SyncAction::Descend(pair.clone())).expect("descend");

        assert_eq!(event, None);
        assert!(pair.destination.is_dir());
    }

    #[test]
    fn test_execute_descend_onto_file_fails() {
        let dst = TempDir::new().expect("create dst tempdir");
        let blocker = dst.path().join("sub");
        fs::write(&blocker, b"not a dir").expect("write blocker");

        let err = execute_action(&SyncAction::Descend(SyncPair::new("/src/sub", &blocker)))
            .unwrap_err();
        assert!(err.to_string().contains("create directory"));
    }

    #[test]
    fn test_ensure_dir_creates_intermediate_segments() {
        let root = TempDir::new().expect("create tempdir");
        let nested = root.path().join("a/b/c");

        ensure_dir(&nested).expect("ensure dir");
        assert!(nested.is_dir());

        // Existing directory is fine
        ensure_dir(&nested).expect("ensure existing dir");
    }
}
