//! CLI-specific error types with exit codes.
//!
//! This module defines the error type for the CLI layer, wrapping library
//! validation errors and providing appropriate exit codes. Usage errors
//! (unknown flags, missing arguments) never reach this type; clap reports
//! those itself with its own exit code.

use abspath::PathValidationError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Path validation failure (wrapped library error).
    Validation(PathValidationError),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Validation failure
    /// - 2: Usage error (reported by clap before commands run)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Validation(_) => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Validation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Validation(e) => Some(e),
        }
    }
}

impl From<PathValidationError> for CliError {
    fn from(e: PathValidationError) -> Self {
        CliError::Validation(e)
    }
}
