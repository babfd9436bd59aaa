//! Configuration for output directory resolution.
//!
//! The only setting is the output directory override. It is gathered once,
//! at the outermost entry point, into an [`OutputConfig`] value that the
//! resolver takes explicitly.
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via [`ConfigBuilder::with_output_dir`], used
//!    for the CLI `--output-dir` flag)
//! 2. The `OUTPUT_DIR` environment variable
//! 3. The built-in default, [`DEFAULT_OUTPUT_DIR`]
//!
//! An empty value from any source counts as unset.
//!
//! # Examples
//!
//! ```
//! use outdir::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .skip_env()
//!     .with_output_dir("build/artifacts")
//!     .build();
//!
//! assert_eq!(config.raw_output_dir(), Path::new("build/artifacts"));
//! ```

pub mod builder;
pub mod environment;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use schema::OutputConfig;

/// Name of the environment variable that overrides the output directory.
pub const OUTPUT_DIR_ENV: &str = "OUTPUT_DIR";

/// Output directory used when no override is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "./outputs";

/// Permission bits for created directories (`rwxr-xr-x`), before umask.
pub const DEFAULT_DIR_MODE: u32 = 0o755;
