//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AssertCommand, CompletionsCommand, EnsureCommand, PathCommand, ShowCommand, SubdirCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving and creating the output directory.
#[derive(Parser)]
#[command(name = "outdir")]
#[command(version, about = "Resolve and create the output directory", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the output directory (takes precedence over OUTPUT_DIR)
    #[arg(long, value_name = "PATH", global = true)]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve the output directory and create it if missing
    Ensure(EnsureCommand),

    /// Show the resolved output directory without creating it
    Show(ShowCommand),

    /// Create a directory inside the output directory
    Subdir(SubdirCommand),

    /// Build a file path inside the output directory, creating its parent
    Path(PathCommand),

    /// Assert that the output directory exists
    Assert(AssertCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
