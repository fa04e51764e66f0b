//! Error types for encoding, decoding, and file I/O.

use std::io;

use thiserror::Error;

/// A byte stream that does not follow the format contract.
///
/// `offset` is the position of the first byte of the offending value;
/// `row` and `value` are zero-based indices of where it would have landed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Value bytes are neither a lone null marker nor valid UTF-8.
    #[error("invalid UTF-8 in row {row}, value {value} (byte offset {offset})")]
    InvalidUtf8Value {
        row: usize,
        value: usize,
        offset: usize,
    },

    /// A null marker byte that is not the whole of a value closed by a value terminator.
    #[error("misplaced null marker in row {row}, value {value} (byte offset {offset})")]
    MalformedNullMarker {
        row: usize,
        value: usize,
        offset: usize,
    },

    /// The stream does not end with a row terminator.
    #[error("stream truncated: row {row} is not terminated (byte offset {offset})")]
    TruncatedStream { row: usize, offset: usize },

    /// A row terminator follows content (without a null marker) that was never
    /// closed by a value terminator.
    #[error("unterminated value before row terminator in row {row}, value {value} (byte offset {offset})")]
    UnterminatedValue {
        row: usize,
        value: usize,
        offset: usize,
    },
}

/// Raised by the raw-bytes encoder path only; encoding `Value`s is total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("reserved byte {byte:#04x} in value {value} at offset {offset}")]
    ReservedByteInText { value: usize, offset: usize, byte: u8 },
}

/// Anything that can go wrong reading or writing RSV through `std::io`.
#[derive(Debug, Error)]
pub enum RsvError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

pub type Result<T, E = RsvError> = std::result::Result<T, E>;
