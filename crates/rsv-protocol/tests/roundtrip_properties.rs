// crates/rsv-protocol/tests/roundtrip_properties.rs
//
// Codec laws checked over generated documents and byte streams.

use proptest::prelude::*;
use rsv_core::{Document, Row, Value};
use rsv_protocol::{decode, encode, encoded_len, FormatError};

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::Empty),
        ".{1,12}".prop_map(Value::Text),
    ]
}

fn document_strategy() -> impl Strategy<Value = Document> {
    prop::collection::vec(prop::collection::vec(value_strategy(), 0..6), 0..8)
}

// Bytes drawn mostly from sentinels plus a little valid and invalid UTF-8,
// so a fair share of streams actually decode.
fn stream_strategy() -> impl Strategy<Value = Vec<u8>> {
    let alphabet = vec![0xFD, 0xFE, 0xFF, b'a', b'z', 0xC3, 0xA9];
    prop::collection::vec(prop::sample::select(alphabet), 0..32)
}

proptest! {
    #[test]
    fn decode_inverts_encode(doc in document_strategy()) {
        let bytes = encode(&doc);
        prop_assert_eq!(decode(&bytes), Ok(doc));
    }

    #[test]
    fn encode_is_deterministic(doc in document_strategy()) {
        prop_assert_eq!(encode(&doc), encode(&doc.clone()));
    }

    #[test]
    fn encoded_len_is_exact(doc in document_strategy()) {
        prop_assert_eq!(encoded_len(&doc), encode(&doc).len());
    }

    #[test]
    fn every_row_ends_with_row_terminator(doc in document_strategy()) {
        let bytes = encode(&doc);
        let rows = bytes.iter().filter(|&&b| b == 0xFD).count();
        prop_assert_eq!(rows, doc.len());
        if !doc.is_empty() {
            prop_assert_eq!(bytes.last(), Some(&0xFD));
        }
    }

    #[test]
    fn valid_streams_reencode_unchanged(bytes in stream_strategy()) {
        if let Ok(doc) = decode(&bytes) {
            prop_assert_eq!(encode(&doc), bytes);
        }
    }

    #[test]
    fn dropping_final_row_terminator_truncates(doc in document_strategy()) {
        // An empty final row is just FD; without it the rest is still valid.
        prop_assume!(doc.last().is_some_and(|row| !row.is_empty()));
        let mut bytes = encode(&doc);
        bytes.pop();
        let is_truncated = matches!(decode(&bytes), Err(FormatError::TruncatedStream { .. }));
        prop_assert!(is_truncated);
    }
}

#[test]
fn decoding_a_concatenation_appends_rows() {
    let first: Document = vec![vec![Value::text("a")], Row::new()];
    let second: Document = vec![vec![Value::Null, Value::Empty]];

    let mut bytes = encode(&first);
    bytes.extend(encode(&second));

    let mut expected = first;
    expected.extend(second);
    assert_eq!(decode(&bytes).unwrap(), expected);
}
