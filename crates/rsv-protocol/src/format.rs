//! Format contract: the three sentinel bytes and helpers around them.
//!
//! ```text
//! value    := (NULL_VALUE | utf8-bytes | <nothing>) VALUE_TERMINATOR
//! row      := value* ROW_TERMINATOR
//! document := row*
//! ```
//!
//! None of `0xFD`, `0xFE`, `0xFF` can appear in well-formed UTF-8, so no
//! escaping is needed. There is no header, footer, or length prefix.
//!
//! The actual encode/decode logic lives in `binary_codec`.

/// Written after every value, including the last one in a row.
pub const VALUE_TERMINATOR: u8 = 0xFF;

/// Written in place of the content of a null value.
pub const NULL_VALUE: u8 = 0xFE;

/// Written after every row, including the last one in a document.
pub const ROW_TERMINATOR: u8 = 0xFD;

/// Conventional file extension for RSV files.
pub const FILE_EXTENSION: &str = "rsv";

/// True if `b` is one of the three sentinel bytes.
pub fn is_reserved(b: u8) -> bool {
    matches!(b, VALUE_TERMINATOR | NULL_VALUE | ROW_TERMINATOR)
}

/// Position of the first sentinel byte in `bytes`, if any.
pub fn find_reserved(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|&b| is_reserved(b))
}
