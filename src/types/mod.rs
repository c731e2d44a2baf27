//! Core type definitions for dirmirror

mod action;
mod entry;
mod error;
mod event;
mod outcome;

pub use action::{CopyReason, SyncAction};
pub use entry::{DirListing, FileEntry, SyncPair};
pub use error::MirrorError;
pub use event::SyncEvent;
pub use outcome::{PassOutcome, PassStats};
