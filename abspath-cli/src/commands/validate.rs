//! Command to check how a raw path string classifies.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use abspath::path::validate::{validate_absolute, validate_relative};
use clap::Args;

/// Check whether a raw string is a valid absolute path (or, with
/// `--relative`, a valid relative fragment).
#[derive(Args)]
pub struct ValidateCommand {
    /// Path string to classify
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Expect a relative path fragment instead of an absolute path
    #[arg(long)]
    pub relative: bool,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();

        let result = if self.relative {
            validate_relative(&self.path)
        } else {
            validate_absolute(&self.path)
        };

        match result {
            Ok(normalized) => {
                let kind = if self.relative { "relative" } else { "absolute" };
                println!("valid {kind} path: {normalized}");
                Ok(())
            }
            Err(e) => {
                logger.debug(&format!("hint: {}", e.recovery_suggestion()));
                Err(e.into())
            }
        }
    }
}
