// crates/rsv-cli/tests/commands.rs
use std::fs;
use std::io;

use rsv_cli::commands::{check, default_example_path, dump, example_document, write_example, CheckReport};
use rsv_cli::CliError;
use rsv_protocol::text_codec::TextStyle;
use rsv_protocol::{encode, load};
use tempfile::tempdir;

const EXAMPLE_TEXT: &str = "\
[<Hello>|<🌎>]
[]
[null|<>]
[<1>|<2>|<3>|<4>]
[<>|<>|<a>]
[null|<>|null]
[null]
[<>|null]
[<>]
[<>|null|<>|<>]
";

#[test]
fn example_file_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("example.rsv");

    write_example(&path).unwrap();

    assert_eq!(fs::read(&path).unwrap(), encode(&example_document()));
    assert_eq!(load(&path).unwrap(), example_document());
}

#[test]
fn check_reports_counts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("example.rsv");
    write_example(&path).unwrap();

    let reports = check(&[path.clone()]).unwrap();
    assert_eq!(
        reports,
        vec![CheckReport {
            file: path.display().to_string(),
            bytes: 52,
            rows: 10,
            values: 22,
            nulls: 6,
        }]
    );
}

#[test]
fn dump_renders_files_in_order() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.rsv");
    let second = dir.path().join("second.rsv");
    write_example(&first).unwrap();
    fs::write(&second, [b'x', 0xFF, 0xFD]).unwrap();

    let mut out = Vec::new();
    dump(&[first, second], io::empty(), &TextStyle::default(), &mut out).unwrap();

    let expected = format!("{EXAMPLE_TEXT}[<x>]\n");
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn dump_reads_stdin_without_files() {
    let input = encode(&example_document());
    let style = TextStyle {
        null_value: "-".into(),
        ..TextStyle::default()
    };

    let mut out = Vec::new();
    dump(&[], input.as_slice(), &style, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().nth(2), Some("[-|<>]"));
    assert_eq!(text.lines().count(), 10);
}

#[test]
fn dump_missing_file_is_open_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.rsv");

    let err = dump(&[missing], io::empty(), &TextStyle::default(), Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::Open { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn check_corrupt_file_is_format_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.rsv");
    fs::write(&path, [b'a', 0xFF]).unwrap();

    let err = check(&[path]).unwrap_err();
    assert!(matches!(err, CliError::Format { .. }));
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn empty_stdin_dumps_nothing() {
    let mut out = Vec::new();
    dump(&[], io::empty(), &TextStyle::default(), &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn default_example_path_uses_rsv_extension() {
    assert_eq!(default_example_path(), std::path::PathBuf::from("example.rsv"));
}
