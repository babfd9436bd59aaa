//! Environment variable handling for configuration overrides.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use super::schema::OutputConfig;
use super::OUTPUT_DIR_ENV;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use outdir::config::{EnvironmentConfig, OutputConfig};
///
/// let mut config = OutputConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config);
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads `OUTPUT_DIR`. When it is set to a non-empty value it replaces
    /// whatever `config` held; otherwise `config` is left untouched.
    pub fn apply_overrides(config: &mut OutputConfig) {
        if let Some(dir) = Self::output_dir() {
            log::debug!("{OUTPUT_DIR_ENV} override: {}", dir.display());
            config.output_dir = Some(dir);
        }
    }

    /// Read the `OUTPUT_DIR` override.
    ///
    /// The value is taken as raw OS bytes, so non-UTF-8 paths pass through.
    /// Returns `None` when the variable is unset or empty.
    #[must_use]
    pub fn output_dir() -> Option<PathBuf> {
        Self::non_empty(env::var_os(OUTPUT_DIR_ENV))
    }

    fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
        value.filter(|v| !v.is_empty()).map(PathBuf::from)
    }
}
