//! SyncEvent - what a pass reports to the log sink

use std::fmt;
use std::path::PathBuf;

/// One reportable event of a reconciliation pass.
///
/// `Display` renders the log message body, without the timestamp prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// A file was copied over its destination path
    Copied {
        source: PathBuf,
        destination: PathBuf,
    },

    /// A destination file was deleted
    Deleted { path: PathBuf },

    /// A destination directory tree was deleted
    DeletedDirectory { path: PathBuf },

    /// The pass stopped on an error
    Error { message: String },
}

impl fmt::Display for SyncEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncEvent::Copied {
                source,
                destination,
            } => write!(
                f,
                "Copied: {} to {}",
                source.display(),
                destination.display()
            ),
            SyncEvent::Deleted { path } => write!(f, "Deleted: {}", path.display()),
            SyncEvent::DeletedDirectory { path } => {
                write!(f, "Deleted directory: {}", path.display())
            }
            SyncEvent::Error { message } => write!(f, "Error: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_formats() {
        let copied = SyncEvent::Copied {
            source: PathBuf::from("/src/a.txt"),
            destination: PathBuf::from("/dst/a.txt"),
        };
        assert_eq!(copied.to_string(), "Copied: /src/a.txt to /dst/a.txt");

        let deleted = SyncEvent::Deleted {
            path: PathBuf::from("/dst/stale.txt"),
        };
        assert_eq!(deleted.to_string(), "Deleted: /dst/stale.txt");

        let deleted_dir = SyncEvent::DeletedDirectory {
            path: PathBuf::from("/dst/old"),
        };
        assert_eq!(deleted_dir.to_string(), "Deleted directory: /dst/old");

        let error = SyncEvent::Error {
            message: "disk full".to_string(),
        };
        assert_eq!(error.to_string(), "Error: disk full");
    }
}
