//! Command to assert that the output directory exists.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::Args;

/// Assert that the output directory exists, without creating it.
#[derive(Args)]
pub struct AssertCommand {
    /// Invert the assertion (fail if the output directory exists)
    #[arg(long)]
    pub not: bool,
}

impl AssertCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global);
        let output_dir = resolver.cleaned_path();
        let exists = resolver.exists();

        let success = if self.not { !exists } else { exists };
        if success {
            return Ok(());
        }

        let msg = if self.not {
            format!(
                "Assertion failed: output directory exists at {}",
                output_dir.display()
            )
        } else {
            format!(
                "Assertion failed: output directory not found at {}",
                output_dir.display()
            )
        };
        Err(CliError::SemanticFailure(msg))
    }
}
