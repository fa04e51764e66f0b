//! `rsv`: dump, check, and generate RSV files.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rsv_cli::commands;
use rsv_cli::config::{Config, StyleOverrides};
use rsv_cli::error::USAGE_EXIT_CODE;
use rsv_cli::CliError;

#[derive(Parser)]
#[command(name = "rsv", version)]
#[command(about = "Inspect and produce RSV (Rows of String Values) files")]
struct Cli {
    /// TOML file with a [style] table
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print RSV files as readable text (stdin when no files are given)
    Dump {
        #[command(flatten)]
        style: StyleOverrides,

        files: Vec<PathBuf>,
    },

    /// Validate RSV files and print a summary of each
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Write the example document (to example.rsv by default)
    Example { path: Option<PathBuf> },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(parse_exit_code(&err));
        }
    };
    init_tracing(cli.debug);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rsv: {err:#}");
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Dump { style, files } => {
            let config = Config::load(cli.config.as_deref(), &style).map_err(CliError::from)?;
            let stdout = io::stdout().lock();
            commands::dump(&files, io::stdin().lock(), &config.style, stdout)?;
        }
        Command::Check { files } => {
            let reports = commands::check(&files).with_context(|| format!("checking {} file(s)", files.len()))?;
            for r in reports {
                println!(
                    "{}: {} bytes, {} rows, {} values ({} null)",
                    r.file, r.bytes, r.rows, r.values, r.nulls
                );
            }
        }
        Command::Example { path } => {
            let path = path.unwrap_or_else(commands::default_example_path);
            commands::write_example(&path)?;
        }
    }
    Ok(())
}

fn init_tracing(debug: bool) {
    let env_filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// `--help` and `--version` succeed; real usage errors get their own code.
fn parse_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        USAGE_EXIT_CODE
    } else {
        0
    }
}

fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.chain()
        .find_map(|e| e.downcast_ref::<CliError>())
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE)
}
