//! rsv-core
//!
//! Pure data model for "Rows of String Values":
//! - [`Value`]: null, empty, or non-empty text
//! - [`Row`]: an ordered list of values
//! - [`Document`]: an ordered list of rows
//!
//! Byte-level encoding lives in the `rsv-protocol` crate.

pub mod value;

pub use value::Value;

/// One row of a document. May hold zero values.
pub type Row = Vec<Value>;

/// A full table of rows. May hold zero rows.
pub type Document = Vec<Row>;
