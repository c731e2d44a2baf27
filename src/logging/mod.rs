//! Event logging and diagnostics
//!
//! Two separate channels:
//! - the event log ([`LogSink`]): the user-facing record of copies, deletions
//!   and pass errors
//! - diagnostics (`tracing`): scheduler and pass internals on stderr, off
//!   below `warn` unless `RUST_LOG` asks for more

mod sink;

pub use sink::{format_line, FileLog, LogFileStatus, LogSink, MemoryLog, TIMESTAMP_FORMAT};

use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// File name used when the log path names a directory
pub const DEFAULT_LOG_FILE_NAME: &str = "sync.log";

/// Install the stderr diagnostics subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Turn user input into the final log file path
///
/// A path without an extension is taken to be a directory and gets
/// [`DEFAULT_LOG_FILE_NAME`] appended.
pub fn resolve_log_path(input: &Path) -> PathBuf {
    if input.extension().is_none() {
        input.join(DEFAULT_LOG_FILE_NAME)
    } else {
        input.to_path_buf()
    }
}
