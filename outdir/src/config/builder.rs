//! Builder that merges configuration sources by precedence.

use std::path::PathBuf;

use super::environment::EnvironmentConfig;
use super::schema::OutputConfig;

/// Builds an [`OutputConfig`] from the environment and programmatic
/// overrides.
///
/// # Examples
///
/// ```no_run
/// use outdir::config::ConfigBuilder;
///
/// // Environment first, then the default
/// let config = ConfigBuilder::new().build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    overrides: OutputConfig,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder that reads the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not consult environment variables.
    ///
    /// Useful in tests and for callers that inject every setting.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Override the output directory. Takes precedence over `OUTPUT_DIR`.
    ///
    /// An empty path is ignored, so the environment or default applies.
    #[must_use]
    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.overrides = OutputConfig::with_output_dir(path);
        self
    }

    /// Layer a whole configuration on top of the environment.
    #[must_use]
    pub fn with_config(mut self, config: OutputConfig) -> Self {
        self.overrides = config;
        self
    }

    /// Merge all sources into the final configuration.
    #[must_use]
    pub fn build(self) -> OutputConfig {
        let mut config = OutputConfig::default();

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config);
        }

        if !self.overrides.is_default() {
            config.output_dir = self.overrides.output_dir;
        }

        config
    }
}
