//! # dirmirror - periodic one-way directory mirroring
//!
//! Keeps a destination directory tree in step with a source tree. On every
//! tick of a fixed timer one reconciliation pass copies new and updated
//! files, deletes destination files and directories the source no longer
//! has, and recurses into subdirectories. Every action is appended to a log
//! file.

// Module declarations
pub mod commands;
pub mod config;
pub mod diff;
pub mod executor;
pub mod logging;
pub mod reconciler;
pub mod scanner;
pub mod scheduler;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use logging::{FileLog, LogSink, MemoryLog};
pub use reconciler::Reconciler;
pub use scheduler::{OverlapPolicy, Scheduler, SchedulerHandle};
pub use types::{MirrorError, PassOutcome, PassStats, SyncEvent};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
