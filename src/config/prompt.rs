//! Interactive collection of the session inputs

use super::validate::{parse_interval, validate_destination, validate_log_path, validate_source};
use super::Config;
use crate::types::MirrorError;
use std::io::{BufRead, Write};

/// Asks for each input in turn and re-asks until the answer is valid
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gather source, destination, log path and interval into a `Config`
    ///
    /// # Errors
    /// `MirrorError::Input` if the input stream ends before every value is
    /// given; IO errors on the streams themselves.
    pub fn collect(&mut self) -> Result<Config, MirrorError> {
        let source = self.ask_path("source", validate_source)?;
        let destination = self.ask_path("destination", |input| {
            validate_destination(input, &source)
        })?;
        let log_file = self.ask_path("log", validate_log_path)?;
        writeln!(self.output)?;

        let interval = self.ask(
            "Please enter the interval in seconds (e.g., 60):",
            "interval",
            parse_interval,
            |_| "Invalid input. Please enter a valid number for the interval in seconds:".to_string(),
        )?;
        writeln!(self.output)?;

        Ok(Config {
            source,
            destination,
            log_file,
            interval,
            ..Config::default()
        })
    }

    fn ask_path<T>(
        &mut self,
        kind: &str,
        validate: impl Fn(&str) -> Result<T, MirrorError>,
    ) -> Result<T, MirrorError> {
        let question = format!(
            "Please enter the {} path (e.g., {}):",
            kind,
            example_path(kind)
        );
        self.ask(&question, kind, validate, |reason| {
            format!(
                "Invalid path ({}). Please enter a valid {} path:",
                reason, kind
            )
        })
    }

    fn ask<T>(
        &mut self,
        question: &str,
        what: &str,
        validate: impl Fn(&str) -> Result<T, MirrorError>,
        retry: impl Fn(&str) -> String,
    ) -> Result<T, MirrorError> {
        writeln!(self.output, "{}", question)?;
        self.output.flush()?;

        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(MirrorError::Input(format!(
                    "input closed while waiting for the {}",
                    what
                )));
            }

            match validate(line.trim()) {
                Ok(value) => return Ok(value),
                Err(MirrorError::Validation(reason)) => {
                    writeln!(self.output, "{}", retry(&reason))?;
                    self.output.flush()?;
                }
                Err(other) => return Err(other),
            }
        }
    }
}

fn example_path(kind: &str) -> String {
    if cfg!(windows) {
        format!("C:\\{}Folder", kind)
    } else {
        format!("/home/user/{}Folder", kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;
    use tempfile::TempDir;

    fn run(input: String) -> (Result<Config, MirrorError>, String) {
        let mut output = Vec::new();
        let result = Prompter::new(Cursor::new(input), &mut output).collect();
        (result, String::from_utf8(output).expect("utf8 output"))
    }

    #[test]
    fn test_collect_valid_answers() {
        let temp = TempDir::new().expect("create tempdir");
        let src = temp.path().join("src");
        std::fs::create_dir(&src).expect("create src");
        let dst = temp.path().join("dst");

        let input = format!(
            "{}\n{}\n{}\n30\n",
            src.display(),
            dst.display(),
            temp.path().display()
        );
        let (result, output) = run(input);
        let config = result.expect("collect config");

        assert_eq!(config.source, src);
        assert_eq!(config.destination, dst);
        assert_eq!(config.log_file, temp.path().join("sync.log"));
        assert_eq!(config.interval, Duration::from_secs(30));
        assert!(output.contains("Please enter the source path"));
        assert!(output.contains("Please enter the interval in seconds"));
    }

    #[test]
    fn test_reasks_until_valid() {
        let temp = TempDir::new().expect("create tempdir");
        let src = temp.path().join("src");
        std::fs::create_dir(&src).expect("create src");
        let dst = temp.path().join("dst");
        let missing = temp.path().join("missing");

        let input = format!(
            "{missing}\n\n{src}\n{src}\n{dst}\n{missing_log}\n{log}\nsoon\n0\n{huge}\n15\n",
            missing = missing.display(),
            src = src.display(),
            dst = dst.display(),
            missing_log = missing.join("x.log").display(),
            log = temp.path().join("mirror.log").display(),
            huge = i64::MAX,
        );
        let (result, output) = run(input);
        let config = result.expect("collect config");

        assert_eq!(config.source, src);
        assert_eq!(config.destination, dst);
        assert_eq!(config.log_file, temp.path().join("mirror.log"));
        assert_eq!(config.interval, Duration::from_secs(15));

        assert_eq!(
            output.matches("Please enter a valid source path").count(),
            2
        );
        assert_eq!(
            output.matches("Please enter a valid destination path").count(),
            1
        );
        assert_eq!(output.matches("Please enter a valid log path").count(), 1);
        assert_eq!(
            output
                .matches("Invalid input. Please enter a valid number")
                .count(),
            3
        );
    }

    #[test]
    fn test_closed_input_is_error() {
        let (result, _) = run(String::new());
        let err = result.unwrap_err();

        assert!(matches!(err, MirrorError::Input(_)));
        assert!(err.to_string().contains("source"));
    }
}
