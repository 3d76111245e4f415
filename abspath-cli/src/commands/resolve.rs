//! Command to resolve a relative fragment against a base path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use abspath::AbsolutePath;
use clap::Args;

/// Resolve a path fragment against a base absolute path.
///
/// An absolute fragment ignores the base entirely.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path fragment to resolve (relative or absolute)
    #[arg(value_name = "FRAGMENT")]
    pub fragment: String,

    /// Base absolute path to resolve against
    #[arg(long, value_name = "PATH")]
    pub base: String,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();

        let base = AbsolutePath::try_new(&self.base)?;
        let resolved = AbsolutePath::try_resolve(&self.fragment, &base)?;
        logger.debug(&format!(
            "resolved '{}' against '{base}' to '{resolved}'",
            self.fragment
        ));

        println!("{resolved}");
        Ok(())
    }
}
