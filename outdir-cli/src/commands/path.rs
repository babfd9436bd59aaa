//! Command to build a file path inside the output directory.

use crate::error::CliError;
use crate::utils::{build_resolver, print_path, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Print a file path inside the output directory after creating its parent.
///
/// The file itself is not created.
#[derive(Args)]
pub struct PathCommand {
    /// Path components below the output directory, ending in the file name
    #[arg(required = true, value_name = "PART")]
    pub parts: Vec<PathBuf>,
}

impl PathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let file = build_resolver(global).file_path(&self.parts)?;
        print_path(&file)
    }
}
