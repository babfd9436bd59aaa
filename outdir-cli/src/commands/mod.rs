//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `ensure`: Resolve and create the output directory
//! - `show`: Show the resolved output directory without creating it
//! - `subdir`: Create a directory inside the output directory
//! - `path`: Build a file path inside the output directory
//! - `assert`: Assert that the output directory exists
//! - `completions`: Generate shell completion scripts

pub mod assert;
pub mod completions;
pub mod ensure;
pub mod path;
pub mod show;
pub mod subdir;

pub use assert::AssertCommand;
pub use completions::CompletionsCommand;
pub use ensure::EnsureCommand;
pub use path::PathCommand;
pub use show::ShowCommand;
pub use subdir::SubdirCommand;
