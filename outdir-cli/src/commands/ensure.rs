//! Command to resolve and create the output directory.

use crate::error::CliError;
use crate::utils::{build_resolver, print_report, GlobalOptions, OutputFormat};
use clap::Args;
use outdir::OutputDirReport;

/// Resolve the output directory, create it if missing, and print it.
#[derive(Args)]
pub struct EnsureCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl EnsureCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global);
        let output_dir = resolver.ensure()?;

        let report = OutputDirReport {
            output_dir,
            exists: true,
        };
        print_report(&report, self.format)
    }
}
