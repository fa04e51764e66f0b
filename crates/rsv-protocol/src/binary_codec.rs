//! Binary encoding/decoding between `rsv_core::Document` and RSV bytes.
//!
//! Layout (see `format` for the byte values):
//!
//! ```text
//! Null     : FE FF
//! Empty    : FF
//! Text(s)  : <utf8 of s> FF
//! Row      : <value>* FD
//! Document : <row>*
//! ```
//!
//! Encoding is total and deterministic: the same document always produces
//! the same bytes. Decoding is strict: any deviation is a [`FormatError`],
//! and no partial document is returned.

use rsv_core::{Document, Row, Value};

use crate::error::{EncodeError, FormatError};
use crate::format::{find_reserved, NULL_VALUE, ROW_TERMINATOR, VALUE_TERMINATOR};

// ============================================================================
// ENCODE
// ============================================================================

/// Encode a whole document into a fresh buffer.
pub fn encode(doc: &[Row]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(doc));
    encode_into(doc, &mut out);
    out
}

/// Encode a whole document, appending to `out`.
pub fn encode_into(doc: &[Row], out: &mut Vec<u8>) {
    for row in doc {
        encode_row(row, out);
    }
}

/// Encode one row (its values plus the row terminator), appending to `out`.
pub fn encode_row(row: &[Value], out: &mut Vec<u8>) {
    for value in row {
        encode_value(value, out);
    }
    out.push(ROW_TERMINATOR);
}

/// Encode one value (content plus the value terminator), appending to `out`.
pub fn encode_value(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Null => out.push(NULL_VALUE),
        Value::Empty => {}
        Value::Text(s) => out.extend_from_slice(s.as_bytes()),
    }
    out.push(VALUE_TERMINATOR);
}

/// Exact number of bytes [`encode`] will produce for `doc`.
pub fn encoded_len(doc: &[Row]) -> usize {
    doc.iter().map(|row| row_len(row)).sum()
}

fn row_len(row: &[Value]) -> usize {
    let values: usize = row
        .iter()
        .map(|value| match value {
            Value::Null => 2,
            Value::Empty => 1,
            Value::Text(s) => s.len() + 1,
        })
        .sum();
    values + 1
}

/// Encode one row of raw byte values, appending to `out`.
///
/// `None` is a null, an empty slice is an empty value. Unlike `&str`,
/// raw bytes may carry sentinel bytes; such a row is rejected with
/// [`EncodeError::ReservedByteInText`] and nothing is appended to `out`.
/// Content is not otherwise checked for UTF-8 validity.
pub fn encode_raw_row<B: AsRef<[u8]>>(row: &[Option<B>], out: &mut Vec<u8>) -> Result<(), EncodeError> {
    for (idx, value) in row.iter().enumerate() {
        let Some(bytes) = value else { continue };
        let bytes = bytes.as_ref();
        if let Some(offset) = find_reserved(bytes) {
            return Err(EncodeError::ReservedByteInText {
                value: idx,
                offset,
                byte: bytes[offset],
            });
        }
    }

    for value in row {
        match value {
            None => out.push(NULL_VALUE),
            Some(bytes) => out.extend_from_slice(bytes.as_ref()),
        }
        out.push(VALUE_TERMINATOR);
    }
    out.push(ROW_TERMINATOR);

    Ok(())
}

// ============================================================================
// DECODE
// ============================================================================

/// Decode a complete RSV byte stream.
///
/// The buffer must hold zero or more complete rows; an empty buffer is an
/// empty document.
pub fn decode(buf: &[u8]) -> Result<Document, FormatError> {
    let mut doc = Document::new();
    let mut row = Row::new();
    let mut row_start = 0;
    let mut value_start = 0;

    for (pos, &byte) in buf.iter().enumerate() {
        match byte {
            VALUE_TERMINATOR => {
                let value = decode_value(&buf[value_start..pos], doc.len(), row.len(), value_start)?;
                row.push(value);
                value_start = pos + 1;
            }
            ROW_TERMINATOR => {
                // FD must directly follow an FF, or open the row.
                let pending = &buf[value_start..pos];
                if pending.contains(&NULL_VALUE) {
                    return Err(FormatError::MalformedNullMarker {
                        row: doc.len(),
                        value: row.len(),
                        offset: value_start,
                    });
                }
                if !pending.is_empty() {
                    return Err(FormatError::UnterminatedValue {
                        row: doc.len(),
                        value: row.len(),
                        offset: value_start,
                    });
                }
                doc.push(std::mem::take(&mut row));
                value_start = pos + 1;
                row_start = pos + 1;
            }
            _ => {}
        }
    }

    if row_start != buf.len() {
        return Err(FormatError::TruncatedStream {
            row: doc.len(),
            offset: row_start,
        });
    }

    Ok(doc)
}

fn decode_value(raw: &[u8], row: usize, value: usize, offset: usize) -> Result<Value, FormatError> {
    match raw {
        [] => Ok(Value::Empty),
        [NULL_VALUE] => Ok(Value::Null),
        _ if raw.contains(&NULL_VALUE) => Err(FormatError::MalformedNullMarker { row, value, offset }),
        _ => std::str::from_utf8(raw)
            .map(|s| Value::Text(s.to_owned()))
            .map_err(|_| FormatError::InvalidUtf8Value { row, value, offset }),
    }
}
