//! Command-line surface
//!
//! All session settings are asked for interactively; the command line only
//! answers `--help` and `--version`.

use clap::Parser;

/// Keep a destination directory in step with a source directory
#[derive(Debug, Parser)]
#[command(
    name = "dirmirror",
    version,
    about = "Periodically mirror a source directory onto a destination directory",
    long_about = "Periodically mirror a source directory onto a destination directory.\n\n\
                  The source, destination, log file and interval are asked for \
                  interactively at startup. Every pass copies new and updated files, \
                  deletes files and directories missing from the source, and appends \
                  each action to the log file."
)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_accepted() {
        assert!(Cli::try_parse_from(["dirmirror"]).is_ok());
        assert!(Cli::try_parse_from(["dirmirror", "--source", "/tmp"]).is_err());
    }
}
