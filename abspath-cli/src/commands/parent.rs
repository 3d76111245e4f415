//! Command to walk up the directory hierarchy.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use abspath::AbsolutePath;
use clap::Args;

/// Print an ancestor of the given path.
///
/// Walking past the root is not an error; the root is its own parent.
#[derive(Args)]
pub struct ParentCommand {
    /// Absolute path to start from
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Number of levels to walk up
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub depth: usize,
}

impl ParentCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = AbsolutePath::try_new(&self.path)?;
        println!("{}", path.ancestor(self.depth));
        Ok(())
    }
}
