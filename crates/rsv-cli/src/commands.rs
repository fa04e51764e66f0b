//! Implementations of the `rsv` subcommands.
//!
//! Each command takes its input and output explicitly so it can run
//! against in-memory buffers in tests.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use rsv_core::{Document, Value};
use rsv_protocol::text_codec::{write_text, TextStyle};
use rsv_protocol::format::FILE_EXTENSION;
use rsv_protocol::{decode, save};
use tracing::{debug, info};

use crate::error::CliError;

/// Display name used for standard input.
pub const STDIN_NAME: &str = "(stdin)";

/// Display name used for standard output.
pub const STDOUT_NAME: &str = "(stdout)";

/// Render each file (or `stdin` when `files` is empty) as text into `out`.
///
/// Stops at the first file that fails; earlier files are already written.
pub fn dump<R: Read, W: Write>(files: &[PathBuf], stdin: R, style: &TextStyle, mut out: W) -> Result<(), CliError> {
    if files.is_empty() {
        let doc = read_source(STDIN_NAME, stdin)?;
        return render(&doc, style, &mut out);
    }

    for path in files {
        let doc = read_file(path)?;
        render(&doc, style, &mut out)?;
    }
    Ok(())
}

/// Summary of one validated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub file: String,
    pub bytes: usize,
    pub rows: usize,
    pub values: usize,
    pub nulls: usize,
}

impl CheckReport {
    fn new(file: String, bytes: usize, doc: &Document) -> Self {
        let values = doc.iter().map(Vec::len).sum();
        let nulls = doc.iter().flatten().filter(|v| v.is_null()).count();
        CheckReport {
            file,
            bytes,
            rows: doc.len(),
            values,
            nulls,
        }
    }
}

/// Decode every file, stopping at the first invalid one.
pub fn check(files: &[PathBuf]) -> Result<Vec<CheckReport>, CliError> {
    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        let name = path.display().to_string();
        let bytes = read_bytes(&name, open(path)?)?;
        let doc = decode_named(&name, &bytes)?;

        let report = CheckReport::new(name, bytes.len(), &doc);
        info!(
            file = %report.file,
            rows = report.rows,
            values = report.values,
            nulls = report.nulls,
            "valid rsv file"
        );
        reports.push(report);
    }
    Ok(reports)
}

/// The demonstration table: mixed nulls, empties, multi-value rows and
/// non-ASCII text.
pub fn example_document() -> Document {
    fn row(values: &[Option<&str>]) -> Vec<Value> {
        values.iter().map(|v| Value::from(*v)).collect()
    }

    vec![
        row(&[Some("Hello"), Some("🌎")]),
        row(&[]),
        row(&[None, Some("")]),
        row(&[Some("1"), Some("2"), Some("3"), Some("4")]),
        row(&[Some(""), Some(""), Some("a")]),
        row(&[None, Some(""), None]),
        row(&[None]),
        row(&[Some(""), None]),
        row(&[Some("")]),
        row(&[Some(""), None, Some(""), Some("")]),
    ]
}

/// Where `rsv example` writes when no path is given: `example.rsv`.
pub fn default_example_path() -> PathBuf {
    PathBuf::from("example").with_extension(FILE_EXTENSION)
}

/// Write [`example_document`] to `path`.
pub fn write_example(path: &Path) -> Result<(), CliError> {
    let name = path.display().to_string();
    let doc = example_document();
    save(path, &doc).map_err(|err| CliError::writing(&name, err))?;
    info!(file = %name, rows = doc.len(), "wrote example");
    Ok(())
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn open(path: &Path) -> Result<File, CliError> {
    File::open(path).map_err(|source| CliError::Open {
        file: path.display().to_string(),
        source,
    })
}

fn read_file(path: &Path) -> Result<Document, CliError> {
    let file = open(path)?;
    read_source(&path.display().to_string(), file)
}

fn read_source<R: Read>(name: &str, source: R) -> Result<Document, CliError> {
    let bytes = read_bytes(name, source)?;
    decode_named(name, &bytes)
}

fn read_bytes<R: Read>(name: &str, mut source: R) -> Result<Vec<u8>, CliError> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes).map_err(|source| CliError::Read {
        file: name.to_owned(),
        source,
    })?;
    debug!(file = name, bytes = bytes.len(), "read input");
    Ok(bytes)
}

fn decode_named(name: &str, bytes: &[u8]) -> Result<Document, CliError> {
    decode(bytes).map_err(|source| CliError::Format {
        file: name.to_owned(),
        source,
    })
}

fn render<W: Write>(doc: &Document, style: &TextStyle, out: &mut W) -> Result<(), CliError> {
    write_text(out, doc, style).map_err(|source| CliError::Write {
        file: STDOUT_NAME.to_owned(),
        source,
    })
}
