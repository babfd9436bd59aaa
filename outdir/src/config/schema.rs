//! The resolved configuration value.

use std::path::{Path, PathBuf};

use super::DEFAULT_OUTPUT_DIR;

/// Configuration consumed by the output directory resolver.
///
/// # Examples
///
/// ```
/// use outdir::config::OutputConfig;
/// use std::path::Path;
///
/// let config = OutputConfig::default();
/// assert_eq!(config.raw_output_dir(), Path::new("./outputs"));
///
/// let config = OutputConfig::with_output_dir("/srv/out");
/// assert_eq!(config.raw_output_dir(), Path::new("/srv/out"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Output directory override. `None` selects the default.
    pub output_dir: Option<PathBuf>,
}

impl OutputConfig {
    /// Create a configuration with an explicit override.
    ///
    /// An empty path is treated as no override.
    #[must_use]
    pub fn with_output_dir(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            output_dir: (!path.as_os_str().is_empty()).then_some(path),
        }
    }

    /// The output directory before cleaning: the override if one is set,
    /// otherwise [`DEFAULT_OUTPUT_DIR`].
    #[must_use]
    pub fn raw_output_dir(&self) -> &Path {
        self.output_dir
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_DIR))
    }

    /// Whether the default directory is in effect.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.output_dir
            .as_deref()
            .map_or(true, |p| p.as_os_str().is_empty())
    }
}
