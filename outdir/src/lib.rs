#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # outdir
//!
//! A library for resolving and creating a configurable output directory.
//!
//! The output directory comes from the `OUTPUT_DIR` environment variable,
//! falling back to `./outputs` when it is unset or empty. The path is
//! cleaned lexically and created, with any missing parents, before it is
//! handed back.
//!
//! ## Core Types
//!
//! - [`resolve_output_dir`] and [`resolve_output_dir_with`]: One-call resolution
//! - [`OutputDirResolver`]: Resolution plus helpers for paths inside the directory
//! - [`OutputConfig`] and [`ConfigBuilder`]: Injectable configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use outdir::{OutputConfig, OutputDirResolver};
//! use std::path::PathBuf;
//!
//! // Reads OUTPUT_DIR, creates the directory, returns its cleaned path
//! let dir = outdir::resolve_output_dir().unwrap();
//! assert!(dir.is_dir());
//!
//! // Injected configuration, no environment access
//! let resolver = OutputDirResolver::new(OutputConfig::with_output_dir("custom/../out"));
//! assert_eq!(resolver.ensure().unwrap(), PathBuf::from("out"));
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod path;
pub mod resolver;

// Re-export key types at crate root for convenience
pub use config::{
    ConfigBuilder, OutputConfig, DEFAULT_DIR_MODE, DEFAULT_OUTPUT_DIR, OUTPUT_DIR_ENV,
};
pub use error::{Error, Result};
pub use logging::{init_logger, resolve_log_level, LogLevel, Logger};
pub use resolver::{resolve_output_dir, resolve_output_dir_with, OutputDirReport, OutputDirResolver};
