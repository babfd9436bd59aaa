//! Command to create a directory inside the output directory.

use crate::error::CliError;
use crate::utils::{build_resolver, print_path, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Create a directory inside the output directory and print its path.
#[derive(Args)]
pub struct SubdirCommand {
    /// Path components below the output directory (e.g. `runs 42`)
    #[arg(required = true, value_name = "PART")]
    pub parts: Vec<PathBuf>,
}

impl SubdirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dir = build_resolver(global).subdir(&self.parts)?;
        print_path(&dir)
    }
}
