//! Error types for dirmirror

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for dirmirror operations
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Filesystem operation failed on a specific path
    #[error("Failed to {action} {}: {source}", path.display())]
    Fs {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Permission denied for specific path
    #[error("Access to the path {} is denied", path.display())]
    PermissionDenied { path: PathBuf },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error (logic checks)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Interactive input could not be gathered
    #[error("Input error: {0}")]
    Input(String),
}

impl MirrorError {
    /// Build a path-aware error from an IO failure.
    ///
    /// Permission failures get their own variant so callers can tell them
    /// apart without digging into the IO error kind.
    pub fn fs(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        if source.kind() == ErrorKind::PermissionDenied {
            MirrorError::PermissionDenied {
                path: path.to_path_buf(),
            }
        } else {
            MirrorError::Fs {
                action,
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Closure form of [`MirrorError::fs`] for use with `map_err`.
    pub fn at<'a>(
        action: &'static str,
        path: &'a Path,
    ) -> impl FnOnce(std::io::Error) -> Self + 'a {
        move |source| MirrorError::fs(action, path, source)
    }
}
