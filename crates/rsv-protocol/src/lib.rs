//! rsv-protocol
//!
//! Byte-level encoding/decoding for "Rows of String Values".
//!
//! This crate turns logical documents (`rsv_core::Document`) into bytes
//! and back again.
//!
//! - [`format`]       : sentinel bytes and helpers
//! - [`binary_codec`] : encoder and strict decoder
//! - [`writer`]       : streaming writer, file save/load
//! - [`text_codec`]   : readable rendering (for tools / debugging)

pub mod binary_codec;
pub mod error;
pub mod format;
pub mod text_codec;
pub mod writer;

pub use binary_codec::{decode, encode, encode_into, encode_raw_row, encode_row, encode_value, encoded_len};
pub use error::{EncodeError, FormatError, RsvError};
pub use text_codec::TextStyle;
pub use writer::{load, read_document, save, write_document, RsvWriter};
