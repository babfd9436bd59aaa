//! Command to show the resolved output directory.

use crate::error::CliError;
use crate::utils::{build_resolver, print_report, GlobalOptions, OutputFormat};
use clap::Args;

/// Show the resolved output directory without creating it.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global);
        log::debug!("raw output directory: {}", resolver.raw_path().display());

        print_report(&resolver.report(), self.format)
    }
}
