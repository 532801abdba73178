//! statefun-module-upgrade - convert legacy StateFun module.yaml documents
//!
//! This is the entry point for the CLI: it reads one legacy module
//! document (from `--input` or stdin), runs the conversion, and writes
//! the upgraded multi-document YAML to stdout. Any failure terminates
//! the run with a diagnostic on stderr and a nonzero exit code.

mod cli;
mod error;
mod logging;

use cli::Cli;
use error::{Error, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;
use tracing::instrument;

fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = logging::init() {
        eprintln!("failed to initialize logging: {}", e);
    }

    match run(&cli) {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, atty::is(atty::Stream::Stderr))
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic: read, convert, write
#[instrument(skip(cli), fields(input = ?cli.input))]
fn run(cli: &Cli) -> Result<()> {
    let raw = read_module(cli.input.as_deref())?;
    tracing::info!(bytes = raw.len(), "read legacy module document");

    let upgraded = statefun_upgrade_core::convert(&raw)?;

    io::stdout().write_all(upgraded.as_bytes())?;
    Ok(())
}

/// Read the legacy document from the given path, or stdin if none
fn read_module(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            if !path.exists() {
                return Err(Error::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
