//! Configuration for the `rsv` tool.
//!
//! Only the text rendering is configurable. Each delimiter is resolved
//! from, lowest to highest priority:
//!
//! 1. built-in defaults (`null`, `|`, `<`, `>`, `[`, `]`)
//! 2. a TOML file passed with `--config`, under a `[style]` table
//! 3. environment variables:
//!    - `RSV_NULL_VALUE`
//!    - `RSV_FIELD_SEPARATOR`
//!    - `RSV_FIELD_OPENING`
//!    - `RSV_FIELD_CLOSING`
//!    - `RSV_LINE_STARTING`
//!    - `RSV_LINE_ENDING`
//! 4. command-line flags

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use rsv_protocol::TextStyle;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file `{}`: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Partial [`TextStyle`]: every field that is `Some` wins over lower layers.
///
/// Shared by the TOML file, the environment, and the `dump` flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverrides {
    /// Text written for a null value
    #[arg(short = 'n', long)]
    pub null_value: Option<String>,

    /// Text written between two values
    #[arg(short = 'f', long)]
    pub field_separator: Option<String>,

    /// Text written before each non-null value
    #[arg(short = 'o', long)]
    pub field_opening: Option<String>,

    /// Text written after each non-null value
    #[arg(short = 'c', long)]
    pub field_closing: Option<String>,

    /// Text written at the start of each row
    #[arg(short = 's', long)]
    pub line_starting: Option<String>,

    /// Text written at the end of each row
    #[arg(short = 'e', long)]
    pub line_ending: Option<String>,
}

impl StyleOverrides {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read overrides through an arbitrary key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        StyleOverrides {
            null_value: lookup("RSV_NULL_VALUE"),
            field_separator: lookup("RSV_FIELD_SEPARATOR"),
            field_opening: lookup("RSV_FIELD_OPENING"),
            field_closing: lookup("RSV_FIELD_CLOSING"),
            line_starting: lookup("RSV_LINE_STARTING"),
            line_ending: lookup("RSV_LINE_ENDING"),
        }
    }

    /// Overwrite the fields of `style` that are set here.
    pub fn apply(&self, style: &mut TextStyle) {
        let pairs = [
            (&self.null_value, &mut style.null_value),
            (&self.field_separator, &mut style.field_separator),
            (&self.field_opening, &mut style.field_opening),
            (&self.field_closing, &mut style.field_closing),
            (&self.line_starting, &mut style.line_starting),
            (&self.line_ending, &mut style.line_ending),
        ];
        for (value, slot) in pairs {
            if let Some(value) = value {
                slot.clone_from(value);
            }
        }
    }
}

/// Layout of the `--config` TOML file.
///
/// ```toml
/// [style]
/// null_value = "NULL"
/// field_separator = ", "
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub style: StyleOverrides,
}

impl FileConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved settings.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub style: TextStyle,
}

impl Config {
    /// Resolve every layer: defaults, `file`, environment, then `flags`.
    pub fn load(file: Option<&Path>, flags: &StyleOverrides) -> Result<Self, ConfigError> {
        let file_config = match file {
            Some(path) => {
                debug!(path = %path.display(), "reading config file");
                Some(FileConfig::read(path)?)
            }
            None => None,
        };
        Ok(Self::resolve(file_config.as_ref(), &StyleOverrides::from_env(), flags))
    }

    /// Combine already-read layers without touching the filesystem or environment.
    pub fn resolve(file: Option<&FileConfig>, env: &StyleOverrides, flags: &StyleOverrides) -> Self {
        let mut style = TextStyle::default();
        if let Some(file) = file {
            file.style.apply(&mut style);
        }
        env.apply(&mut style);
        flags.apply(&mut style);
        Config { style }
    }
}
