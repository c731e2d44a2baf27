//! Event log sinks
//!
//! Every event of a pass goes to a [`LogSink`]. The file sink appends one
//! `<local timestamp>: <message>` line per event and mirrors the message to
//! stdout.

use crate::types::{MirrorError, SyncEvent};
use crate::ui;
use chrono::{DateTime, Local};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Timestamp layout used in log lines
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Destination for pass events.
///
/// Recording never fails from the caller's point of view; a sink that cannot
/// write reports the problem through `tracing` and carries on.
pub trait LogSink: Send + Sync {
    fn record(&self, event: &SyncEvent);
}

/// Whether the log file existed before startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFileStatus {
    Created,
    Existing,
}

/// Render one log line (without the trailing newline)
pub fn format_line(at: DateTime<Local>, event: &SyncEvent) -> String {
    format!("{}: {}", at.format(TIMESTAMP_FORMAT), event)
}

/// Append-only log file with a console mirror
#[derive(Debug)]
pub struct FileLog {
    path: PathBuf,
    file: Mutex<File>,
    mirror_to_console: bool,
}

impl FileLog {
    /// Open `path` for appending, creating it empty if absent
    pub fn open(path: &Path) -> Result<(Self, LogFileStatus), MirrorError> {
        let status = if path.exists() {
            LogFileStatus::Existing
        } else {
            LogFileStatus::Created
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(MirrorError::at("open log file", path))?;

        let log = Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
            mirror_to_console: true,
        };
        Ok((log, status))
    }

    /// Turn the stdout mirror on or off
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.mirror_to_console = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileLog {
    fn record(&self, event: &SyncEvent) {
        if self.mirror_to_console {
            println!("{}", ui::styled_event(event));
        }

        let line = format_line(Local::now(), event);
        let mut file = match self.file.lock() {
            Ok(file) => file,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(file, "{}", line) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to append to log file");
        }
    }
}

/// In-memory sink that keeps every recorded event
#[derive(Debug, Default)]
pub struct MemoryLog {
    events: Mutex<Vec<SyncEvent>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<SyncEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Rendered messages of the events recorded so far
    pub fn messages(&self) -> Vec<String> {
        self.events().iter().map(ToString::to_string).collect()
    }

    pub fn clear(&self) {
        match self.events.lock() {
            Ok(mut events) => events.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl LogSink for MemoryLog {
    fn record(&self, event: &SyncEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}
