//! Command to print the component decomposition of a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use abspath::AbsolutePath;
use clap::Args;

/// Print the components of an absolute path.
///
/// The root marker counts as the first component, so the output for `/`
/// is a single `/` line (or a one-element JSON array).
#[derive(Args)]
pub struct ComponentsCommand {
    /// Absolute path to decompose
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Emit the components as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl ComponentsCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = AbsolutePath::try_new(&self.path)?;
        let components: Vec<&str> = path.components().collect();

        if self.json {
            println!("{}", serde_json::json!(components));
        } else {
            for component in components {
                println!("{component}");
            }
        }
        Ok(())
    }
}
