//! Input validation rules
//!
//! Each validator takes raw user input and returns the parsed value or a
//! `MirrorError::Validation` with a one-line reason.

use crate::logging::resolve_log_path;
use crate::scheduler::MAX_INTERVAL;
use crate::types::MirrorError;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

/// Source must be an existing directory
pub fn validate_source(input: &str) -> Result<PathBuf, MirrorError> {
    let path = non_empty_path(input)?;
    if !path.is_dir() {
        return Err(MirrorError::Validation(format!(
            "{} is not an existing directory",
            path.display()
        )));
    }
    Ok(path)
}

/// Destination may be missing, but not a file, and must not overlap `source`
///
/// Overlap in either direction is refused: a destination inside the source
/// would be copied into itself on every pass, and a source inside the
/// destination would be deleted as a stray.
pub fn validate_destination(input: &str, source: &Path) -> Result<PathBuf, MirrorError> {
    let path = non_empty_path(input)?;
    if path.exists() && !path.is_dir() {
        return Err(MirrorError::Validation(format!(
            "{} exists and is not a directory",
            path.display()
        )));
    }

    let dest_abs = absolute(&path);
    let src_abs = absolute(source);
    if dest_abs == src_abs {
        return Err(MirrorError::Validation(
            "source and destination cannot be the same".to_string(),
        ));
    }
    if dest_abs.starts_with(&src_abs) {
        return Err(MirrorError::Validation(
            "destination cannot be inside the source".to_string(),
        ));
    }
    if src_abs.starts_with(&dest_abs) {
        return Err(MirrorError::Validation(
            "source cannot be inside the destination".to_string(),
        ));
    }

    Ok(path)
}

/// Resolve the log path and check its directory exists
///
/// Extension-less input names a directory and gets `sync.log` appended.
pub fn validate_log_path(input: &str) -> Result<PathBuf, MirrorError> {
    let path = resolve_log_path(&non_empty_path(input)?);

    if path.is_dir() {
        return Err(MirrorError::Validation(format!(
            "{} is a directory",
            path.display()
        )));
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(MirrorError::Validation(format!(
            "directory {} does not exist",
            parent.display()
        )));
    }

    Ok(path)
}

/// Interval must be a positive whole number of seconds, at most
/// [`MAX_INTERVAL`]
pub fn parse_interval(input: &str) -> Result<Duration, MirrorError> {
    let seconds: i64 = input.trim().parse().map_err(|_| {
        MirrorError::Validation(format!("'{}' is not a whole number", input.trim()))
    })?;
    if seconds <= 0 {
        return Err(MirrorError::Validation(
            "interval must be at least one second".to_string(),
        ));
    }
    let interval = Duration::from_secs(seconds.unsigned_abs());
    if interval > MAX_INTERVAL {
        return Err(MirrorError::Validation(format!(
            "interval must be at most {} seconds",
            MAX_INTERVAL.as_secs()
        )));
    }
    Ok(interval)
}

fn non_empty_path(input: &str) -> Result<PathBuf, MirrorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MirrorError::Validation("path is empty".to_string()));
    }
    Ok(PathBuf::from(trimmed))
}

/// Best-effort absolute form of `path` for overlap checks
///
/// Canonicalizes the longest existing prefix and appends the rest, so paths
/// that do not exist yet still compare correctly.
fn absolute(path: &Path) -> PathBuf {
    let base = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };
    let base = normalize(&base);

    let mut existing = base.as_path();
    let mut rest = Vec::new();
    loop {
        if let Ok(canonical) = existing.canonicalize() {
            let mut result = canonical;
            for component in rest.iter().rev() {
                result.push(component);
            }
            return normalize(&result);
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name.to_os_string());
                existing = parent;
            }
            _ => return normalize(&base),
        }
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
