//! Command to print the last path component.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use abspath::AbsolutePath;
use clap::Args;

/// Print the basename of an absolute path.
///
/// The root path has no real last component; its basename is `/` itself.
#[derive(Args)]
pub struct BasenameCommand {
    /// Absolute path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl BasenameCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = AbsolutePath::try_new(&self.path)?;
        println!("{}", path.basename());
        Ok(())
    }
}
