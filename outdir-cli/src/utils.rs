//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including resolver construction and output formatting.

use crate::error::CliError;
use clap::ValueEnum;
use outdir::{ConfigBuilder, OutputDirReport, OutputDirResolver};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose/quiet are consumed by init_logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the output directory location.
    pub output_dir: Option<PathBuf>,
}

/// How a command prints the resolved directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The bare path on one line
    #[default]
    Text,
    /// A JSON object with the path and whether it exists
    Json,
}

/// Build a resolver from the environment and global options.
///
/// `--output-dir` takes precedence over `OUTPUT_DIR`, which takes
/// precedence over the built-in default.
pub fn build_resolver(global: &GlobalOptions) -> OutputDirResolver {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.output_dir {
        builder = builder.with_output_dir(dir.clone());
    }
    OutputDirResolver::new(builder.build())
}

/// Write a path to stdout on its own line.
pub fn print_path(path: &Path) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", path.display())?;
    Ok(())
}

/// Write a report to stdout in the requested format.
pub fn print_report(report: &OutputDirReport, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => print_path(&report.output_dir),
        OutputFormat::Json => {
            let rendered = render_json(report)?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}")?;
            Ok(())
        }
    }
}

fn render_json(report: &OutputDirReport) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(report)?)
}
