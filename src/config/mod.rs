//! Configuration management

mod cli;
mod prompt;
mod validate;

pub use cli::Cli;
pub use prompt::Prompter;
pub use validate::{parse_interval, validate_destination, validate_log_path, validate_source};

use crate::logging::DEFAULT_LOG_FILE_NAME;
use crate::scheduler::{OverlapPolicy, MAX_INTERVAL};
use crate::types::MirrorError;
use std::path::PathBuf;
use std::time::Duration;

/// Everything a mirroring session needs, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source directory
    pub source: PathBuf,

    /// Destination directory (created on demand)
    pub destination: PathBuf,

    /// Event log file
    pub log_file: PathBuf,

    /// Time between passes
    pub interval: Duration,

    /// What to do when a tick fires while the previous pass is still running
    pub overlap: OverlapPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            destination: PathBuf::new(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE_NAME),
            interval: Duration::from_secs(60),
            overlap: OverlapPolicy::default(),
        }
    }
}

impl Config {
    /// Validate configuration
    ///
    /// Applies the same rules the prompts enforce. Run once more at startup
    /// since the filesystem may have changed while the prompts were open.
    pub fn validate(&self) -> Result<(), MirrorError> {
        let to_config_error = |err: MirrorError| match err {
            MirrorError::Validation(msg) => MirrorError::Config(msg),
            other => other,
        };

        validate_source(&self.source.to_string_lossy()).map_err(to_config_error)?;
        validate_destination(&self.destination.to_string_lossy(), &self.source)
            .map_err(to_config_error)?;
        validate_log_path(&self.log_file.to_string_lossy()).map_err(to_config_error)?;

        if self.interval.is_zero() {
            return Err(MirrorError::Config(
                "Interval must be at least one second".to_string(),
            ));
        }
        if self.interval > MAX_INTERVAL {
            return Err(MirrorError::Config(format!(
                "Interval must be at most {} seconds",
                MAX_INTERVAL.as_secs()
            )));
        }

        Ok(())
    }
}
