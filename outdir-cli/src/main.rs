//! Main entry point for the outdir CLI.
//!
//! This is the command-line interface over the outdir library. It provides
//! commands for working with the output directory:
//! - `ensure`: Resolve and create the output directory
//! - `show`: Show the resolved output directory without creating it
//! - `subdir`: Create a directory inside the output directory
//! - `path`: Build a file path inside the output directory
//! - `assert`: Assert that the output directory exists

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = outdir::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        output_dir: cli.output_dir,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Ensure(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Subdir(cmd) => cmd.execute(&global),
        cli::Command::Path(cmd) => cmd.execute(&global),
        cli::Command::Assert(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
