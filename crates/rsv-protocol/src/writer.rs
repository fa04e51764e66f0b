//! Streaming writer and whole-file helpers.
//!
//! [`RsvWriter`] encodes row by row into any `Write` sink, so large
//! documents never need a single contiguous output buffer. [`save`] and
//! [`load`] cover the common "whole document to/from a file" case.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use rsv_core::{Document, Row, Value};
use tracing::debug;

use crate::binary_codec::{decode, encode_raw_row, encode_row};
use crate::error::Result;

/// Row-at-a-time RSV encoder over a buffered sink.
///
/// Dropping the writer flushes the buffer (best effort, errors ignored);
/// call [`finish`](RsvWriter::finish) to observe flush errors and get the
/// sink back.
pub struct RsvWriter<W: Write> {
    inner: BufWriter<W>,
    scratch: Vec<u8>,
    rows_written: u64,
}

impl<W: Write> RsvWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            inner: BufWriter::new(sink),
            scratch: Vec::new(),
            rows_written: 0,
        }
    }

    /// Encode and write one row.
    pub fn write_row(&mut self, row: &[Value]) -> Result<()> {
        self.scratch.clear();
        encode_row(row, &mut self.scratch);
        self.inner.write_all(&self.scratch)?;
        self.rows_written += 1;
        Ok(())
    }

    /// Encode and write one row of raw byte values.
    ///
    /// Rows holding a sentinel byte are rejected before anything is written.
    pub fn write_raw_row<B: AsRef<[u8]>>(&mut self, row: &[Option<B>]) -> Result<()> {
        self.scratch.clear();
        encode_raw_row(row, &mut self.scratch)?;
        self.inner.write_all(&self.scratch)?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flush everything and hand back the underlying sink.
    pub fn finish(self) -> Result<W> {
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}

/// Stream a whole document into `sink`, returning the sink once flushed.
pub fn write_document<W: Write>(sink: W, doc: &[Row]) -> Result<W> {
    let mut writer = RsvWriter::new(sink);
    for row in doc {
        writer.write_row(row)?;
    }
    writer.finish()
}

/// Read `source` to the end and decode it.
pub fn read_document<R: Read>(mut source: R) -> Result<Document> {
    let mut buf = Vec::new();
    source.read_to_end(&mut buf)?;
    Ok(decode(&buf)?)
}

/// Write `doc` to `path`, replacing any existing file.
///
/// The document is written to `<path>.tmp`, synced, then renamed over
/// `path`. On error the temp file is removed; a crash mid-write may leave
/// it behind, with the target untouched.
pub fn save<P: AsRef<Path>>(path: P, doc: &[Row]) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = tmp_path_for(path);

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&tmp_path)?;

    let written = write_document(file, doc).and_then(|file| {
        file.sync_all()?;
        drop(file);
        fs::rename(&tmp_path, path)?;
        Ok(())
    });
    if let Err(err) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    debug!(path = %path.display(), rows = doc.len(), "saved rsv document");
    Ok(())
}

/// Read and decode the RSV file at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let doc = read_document(File::open(path)?)?;
    debug!(path = %path.display(), rows = doc.len(), "loaded rsv document");
    Ok(doc)
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
