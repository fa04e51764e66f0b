//! The three kinds of value an RSV cell can hold.

use std::fmt;

/// A single RSV value.
///
/// `Null` and `Empty` are different things on the wire: a null is written
/// as the null marker byte, an empty string as no bytes at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Absent value.
    Null,

    /// Zero-length string.
    Empty,

    /// Non-empty UTF-8 text.
    ///
    /// Build with [`Value::text`] to keep the non-empty invariant; a
    /// `Text` holding `""` is written exactly like `Empty` and reads
    /// back as `Empty`.
    Text(String),
}

impl Value {
    /// Build a value from a string, mapping `""` to [`Value::Empty`].
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() {
            Value::Empty
        } else {
            Value::Text(s)
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for `Empty` (and for a degenerate `Text("")`).
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Empty => true,
            Value::Text(s) => s.is_empty(),
        }
    }

    /// String contents, or `None` for a null.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Null => None,
            Value::Empty => Some(""),
            Value::Text(s) => Some(s),
        }
    }

    /// Consume the value, returning its string (or `None` for a null).
    pub fn into_option(self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Empty => Some(String::new()),
            Value::Text(s) => Some(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::text(s)
    }
}

impl<T: Into<String>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(s) => Value::text(s),
            None => Value::Null,
        }
    }
}

/// Renders the string contents; a null renders as nothing.
///
/// Use the text codec in `rsv-protocol` when nulls need a visible marker.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_normalizes_empty_string() {
        assert_eq!(Value::text(""), Value::Empty);
        assert_eq!(Value::text(String::new()), Value::Empty);
        assert_eq!(Value::text("a"), Value::Text("a".to_string()));
    }

    #[test]
    fn option_conversion_keeps_null_and_empty_apart() {
        let null: Value = None::<&str>.into();
        let empty: Value = Some("").into();

        assert!(null.is_null());
        assert!(!null.is_empty());
        assert!(empty.is_empty());
        assert!(!empty.is_null());
        assert_ne!(null, empty);
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::Null.as_str(), None);
        assert_eq!(Value::Empty.as_str(), Some(""));
        assert_eq!(Value::from("🌎").as_str(), Some("🌎"));

        assert_eq!(Value::Null.into_option(), None);
        assert_eq!(Value::Empty.into_option(), Some(String::new()));
        assert_eq!(Value::from("x").into_option(), Some("x".to_string()));
    }

    #[test]
    fn degenerate_text_counts_as_empty() {
        assert!(Value::Text(String::new()).is_empty());
    }

    #[test]
    fn display_renders_contents() {
        assert_eq!(Value::from("Hello").to_string(), "Hello");
        assert_eq!(Value::Empty.to_string(), "");
        assert_eq!(Value::Null.to_string(), "");
    }
}
