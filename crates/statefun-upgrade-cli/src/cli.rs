//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API. The
//! surface is deliberately a single command with one optional flag.

use clap::Parser;
use std::path::PathBuf;

/// Convert Apache Flink Stateful Functions module.yaml to >= 3.1 format
///
/// Reads one legacy (< 3.1) module document, rewrites every component
/// into the flat `kind`/`spec` schema, and prints the result to stdout.
#[derive(Parser, Debug)]
#[command(
    name = "statefun-module-upgrade",
    version,
    about,
    long_about = None
)]
pub struct Cli {
    /// Input file (default stdin)
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
