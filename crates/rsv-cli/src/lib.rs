//! rsv-cli
//!
//! Library half of the `rsv` tool: configuration, errors, and the
//! subcommand implementations. `main.rs` only parses arguments and wires
//! logging.

pub mod commands;
pub mod config;
pub mod error;

pub use error::CliError;
