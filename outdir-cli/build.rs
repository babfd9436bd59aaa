//! Build script for outdir-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("outdir")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve and create the output directory")
        .long_about(
            "Command-line tool that resolves the output directory from OUTPUT_DIR \
             (default ./outputs), cleans the path, and creates it if missing",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Override the output directory (takes precedence over OUTPUT_DIR)")
                .value_name("PATH")
                .global(true),
        )
        .subcommands(vec![
            Command::new("ensure")
                .about("Resolve the output directory and create it if missing")
                .long_about("Create the output directory and its parents, then print its path"),
            Command::new("show")
                .about("Show the resolved output directory without creating it")
                .long_about("Print the cleaned output directory path and leave the filesystem alone"),
            Command::new("subdir")
                .about("Create a directory inside the output directory")
                .long_about("Create a nested directory below the output directory and print it"),
            Command::new("path")
                .about("Build a file path inside the output directory, creating its parent")
                .long_about("Print a file path below the output directory after creating its parent"),
            Command::new("assert")
                .about("Assert that the output directory exists")
                .long_about("Exit with status 0 if the output directory exists, 1 otherwise"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main outdir.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("outdir.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
