//! Errors surfaced by the `rsv` commands, each mapped to an exit code.

use std::io;
use std::process::ExitCode;

use rsv_protocol::{FormatError, RsvError};
use thiserror::Error;

use crate::config::ConfigError;

/// Exit status for command-line usage errors (unknown flag, missing argument).
pub const USAGE_EXIT_CODE: u8 = 6;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("reading `{file}`: {source}")]
    Read { file: String, source: io::Error },

    #[error("writing `{file}`: {source}")]
    Write { file: String, source: io::Error },

    #[error("opening `{file}`: {source}")]
    Open { file: String, source: io::Error },

    #[error("in `{file}`: {source}")]
    Format { file: String, source: FormatError },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Read { .. } => 1,
            CliError::Write { .. } => 2,
            CliError::Open { .. } => 3,
            CliError::Format { .. } => 4,
            CliError::Config(_) => 5,
        }
    }

    /// Attach `file` to an error raised while saving a document.
    ///
    /// Saving `Value`s can only fail on I/O; anything else is reported as
    /// invalid data on the same write path.
    pub fn writing(file: &str, err: RsvError) -> Self {
        let source = match err {
            RsvError::Io(source) => source,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        };
        CliError::Write {
            file: file.to_owned(),
            source,
        }
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        ExitCode::from(err.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_kind() {
        let io = || io::Error::new(io::ErrorKind::Other, "boom");
        let file = || "t.rsv".to_string();

        let codes = [
            CliError::Read { file: file(), source: io() }.exit_code(),
            CliError::Write { file: file(), source: io() }.exit_code(),
            CliError::Open { file: file(), source: io() }.exit_code(),
            CliError::Format {
                file: file(),
                source: FormatError::TruncatedStream { row: 0, offset: 0 },
            }
            .exit_code(),
        ];
        assert_eq!(codes, [1, 2, 3, 4]);
    }

    #[test]
    fn message_names_the_file() {
        let err = CliError::Format {
            file: "data.rsv".into(),
            source: FormatError::TruncatedStream { row: 3, offset: 17 },
        };
        let msg = err.to_string();
        assert!(msg.contains("data.rsv"), "{msg}");
        assert!(msg.contains("row 3"), "{msg}");
    }

    #[test]
    fn io_failure_while_writing_maps_to_write() {
        let err = CliError::writing("out.rsv", RsvError::Io(io::Error::new(io::ErrorKind::Other, "disk full")));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn non_io_save_failure_still_maps_to_write() {
        let encode = rsv_protocol::EncodeError::ReservedByteInText {
            value: 0,
            offset: 0,
            byte: 0xFF,
        };
        let err = CliError::writing("out.rsv", RsvError::Encode(encode));
        assert!(matches!(err, CliError::Write { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn usage_code_differs_from_every_error_kind() {
        assert!(![1, 2, 3, 4, 5].contains(&USAGE_EXIT_CODE));
    }
}
