//! Console output

mod summary;

pub use summary::{write_started_banner, write_startup_summary};

use crate::types::SyncEvent;
use console::style;

/// Render an event message for the terminal, colored by kind
pub fn styled_event(event: &SyncEvent) -> String {
    let message = event.to_string();
    match event {
        SyncEvent::Copied { .. } => style(message).green().to_string(),
        SyncEvent::Deleted { .. } | SyncEvent::DeletedDirectory { .. } => {
            style(message).yellow().to_string()
        }
        SyncEvent::Error { .. } => style(message).red().bold().to_string(),
    }
}
