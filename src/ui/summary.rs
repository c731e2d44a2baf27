//! Startup summary printed once the inputs are gathered

use crate::config::Config;
use crate::logging::LogFileStatus;
use std::io::{self, Write};

/// Echo the configuration and say what happens to the log file
pub fn write_startup_summary<W: Write>(
    out: &mut W,
    config: &Config,
    log_status: LogFileStatus,
) -> io::Result<()> {
    writeln!(out, "Source Path: {}", config.source.display())?;
    writeln!(out, "Destination Path: {}", config.destination.display())?;
    writeln!(out, "Interval (in seconds): {}", config.interval.as_secs())?;
    writeln!(out, "Log File Path: {}", config.log_file.display())?;

    let log_name = config
        .log_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match log_status {
        LogFileStatus::Created => writeln!(out, "Log file {} created.", log_name),
        LogFileStatus::Existing => writeln!(
            out,
            "The existing log file {} will be updated with new entries.",
            log_name
        ),
    }
}

/// Line shown once the scheduler is running
pub fn write_started_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Synchronization started. Press [Enter] to exit.")
}
