//! Human-readable rendering of RSV documents.
//!
//! Each row becomes one line:
//!
//! ```text
//! <line_starting> value (<field_separator> value)* <line_ending> \n
//! ```
//!
//! where a text or empty value is wrapped as
//! `<field_opening>text<field_closing>` and a null is written as
//! `<null_value>`. With the default [`TextStyle`]:
//!
//! - `["Hello", "🌎"]`  → `[<Hello>|<🌎>]`
//! - `[]`               → `[]`
//! - `[Null, ""]`       → `[null|<>]`
//!
//! The rendering is for people, not machines: delimiters are not escaped.

use std::io::{self, Write};

use rsv_core::{Row, Value};

/// Delimiters used by the text rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub null_value: String,
    pub field_separator: String,
    pub field_opening: String,
    pub field_closing: String,
    pub line_starting: String,
    pub line_ending: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            null_value: "null".to_string(),
            field_separator: "|".to_string(),
            field_opening: "<".to_string(),
            field_closing: ">".to_string(),
            line_starting: "[".to_string(),
            line_ending: "]".to_string(),
        }
    }
}

/// Format a single row as one line, without the trailing newline.
pub fn format_row(row: &[Value], style: &TextStyle) -> String {
    let mut line = String::new();
    line.push_str(&style.line_starting);

    for (idx, value) in row.iter().enumerate() {
        if idx > 0 {
            line.push_str(&style.field_separator);
        }
        push_value(&mut line, value, style);
    }

    line.push_str(&style.line_ending);
    line
}

/// Format every row, one per line, each line ending in `\n`.
pub fn format_document(doc: &[Row], style: &TextStyle) -> String {
    let mut text = String::new();
    for row in doc {
        text.push_str(&format_row(row, style));
        text.push('\n');
    }
    text
}

/// Write the rendering of `doc` to `out`, one row per line.
pub fn write_text<W: Write>(mut out: W, doc: &[Row], style: &TextStyle) -> io::Result<()> {
    for row in doc {
        writeln!(out, "{}", format_row(row, style))?;
    }
    out.flush()
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn push_value(line: &mut String, value: &Value, style: &TextStyle) {
    match value.as_str() {
        None => line.push_str(&style.null_value),
        Some(s) => {
            line.push_str(&style.field_opening);
            line.push_str(s);
            line.push_str(&style.field_closing);
        }
    }
}
