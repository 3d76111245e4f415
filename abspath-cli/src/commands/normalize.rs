//! Command to normalize a raw path string to canonical form.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use abspath::path::validate::{validate_absolute, validate_relative};
use clap::Args;

/// Normalize a path string to canonical form.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path string to normalize
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Treat the input as a relative path fragment
    #[arg(long)]
    pub relative: bool,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();

        // User input always goes through the validating entry points.
        let normalized = if self.relative {
            validate_relative(&self.path)?
        } else {
            validate_absolute(&self.path)?
        };

        if normalized != self.path {
            logger.debug(&format!("normalized '{}' to '{normalized}'", self.path));
        }

        println!("{normalized}");
        Ok(())
    }
}
