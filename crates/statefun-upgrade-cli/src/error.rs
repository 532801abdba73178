//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling the
//! failure modes of the CLI shell: input acquisition and the conversion
//! itself.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (reading input, writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from the conversion engine
    #[error("conversion failed: {0}")]
    Core(#[from] statefun_upgrade_core::Error),

    /// Input file not found
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Generic error with message
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(_) => 2,
            Self::FileNotFound { .. } => 3,
            Self::Other { .. } => 99,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
