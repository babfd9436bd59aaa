//! Output directory resolution.
//!
//! This module provides the [`OutputDirResolver`] type and the
//! [`resolve_output_dir`] entry point. Resolution is:
//!
//! 1. Take the override from configuration, or the default
//! 2. Clean it lexically
//! 3. Create the directory and its missing ancestors
//! 4. Return the cleaned path
//!
//! Nothing is cached; every call resolves afresh.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{ConfigBuilder, OutputConfig};
use crate::error::{Error, Result};
use crate::fs;
use crate::path::normalize;

/// Resolve the output directory from the process environment and create it.
///
/// Reads `OUTPUT_DIR`; if it is unset or empty, `./outputs` is used. The
/// returned path is the cleaned form of that value (relative paths stay
/// relative to the current working directory).
///
/// # Errors
///
/// Returns [`Error::Filesystem`] if the directory cannot be created.
///
/// # Examples
///
/// ```no_run
/// let dir = outdir::resolve_output_dir().unwrap();
/// assert!(dir.is_dir());
/// ```
pub fn resolve_output_dir() -> Result<PathBuf> {
    resolve_output_dir_with(&ConfigBuilder::new().build())
}

/// Resolve the output directory from an explicit configuration and create
/// it.
///
/// Does not read the environment.
///
/// # Errors
///
/// Returns [`Error::Filesystem`] if the directory cannot be created.
///
/// # Examples
///
/// ```no_run
/// use outdir::config::OutputConfig;
/// use std::path::PathBuf;
///
/// let config = OutputConfig::with_output_dir("custom/../out");
/// let dir = outdir::resolve_output_dir_with(&config).unwrap();
/// assert_eq!(dir, PathBuf::from("out"));
/// ```
pub fn resolve_output_dir_with(config: &OutputConfig) -> Result<PathBuf> {
    OutputDirResolver::new(config.clone()).ensure()
}

/// A snapshot of the resolved output directory, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputDirReport {
    /// The cleaned output directory path.
    pub output_dir: PathBuf,
    /// Whether a directory existed at that path when the report was made.
    pub exists: bool,
}

/// Resolves and creates the output directory and paths beneath it.
///
/// # Examples
///
/// ```no_run
/// use outdir::{OutputConfig, OutputDirResolver};
/// use std::path::PathBuf;
///
/// let resolver = OutputDirResolver::new(OutputConfig::default());
///
/// // No filesystem access
/// assert_eq!(resolver.cleaned_path(), PathBuf::from("outputs"));
///
/// // Creates ./outputs/runs/42
/// let run_dir = resolver.subdir(["runs", "42"]).unwrap();
///
/// // Creates ./outputs/reports, returns ./outputs/reports/summary.csv
/// let report = resolver.file_path(["reports", "summary.csv"]).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct OutputDirResolver {
    config: OutputConfig,
}

impl OutputDirResolver {
    /// Create a resolver for the given configuration.
    #[must_use]
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Create a resolver configured from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ConfigBuilder::new().build())
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// The output directory as configured, before cleaning.
    #[must_use]
    pub fn raw_path(&self) -> &Path {
        self.config.raw_output_dir()
    }

    /// The cleaned output directory. Does not touch the filesystem.
    #[must_use]
    pub fn cleaned_path(&self) -> PathBuf {
        normalize::clean(self.raw_path())
    }

    /// Whether the cleaned output directory currently exists as a directory.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.cleaned_path().is_dir()
    }

    /// Report the cleaned path and whether it exists, without creating it.
    #[must_use]
    pub fn report(&self) -> OutputDirReport {
        let output_dir = self.cleaned_path();
        let exists = output_dir.is_dir();
        OutputDirReport { output_dir, exists }
    }

    /// Create the output directory if needed and return its cleaned path.
    ///
    /// Safe to call repeatedly and from concurrent processes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filesystem`] if the directory cannot be created,
    /// including when a regular file already occupies the path.
    pub fn ensure(&self) -> Result<PathBuf> {
        let cleaned = self.cleaned_path();
        log::debug!(
            "resolving output directory {} -> {}",
            self.raw_path().display(),
            cleaned.display()
        );

        Self::create(&cleaned)?;
        Ok(cleaned)
    }

    /// Create a directory beneath the output directory and return its
    /// cleaned path.
    ///
    /// Every part must be relative, and together they must stay inside the
    /// output directory. With no parts this is the same as [`Self::ensure`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] for an absolute or escaping part, and
    /// [`Error::Filesystem`] if the directory cannot be created.
    pub fn subdir<I, P>(&self, parts: I) -> Result<PathBuf>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let dir = normalize::join_within(self.raw_path(), parts)?;
        Self::create(&dir)?;
        Ok(dir)
    }

    /// Build a file path beneath the output directory, creating its parent
    /// directory but not the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] for an absolute or escaping part, or
    /// when the parts name the output directory itself rather than a file.
    /// Returns [`Error::Filesystem`] if the parent cannot be created.
    pub fn file_path<I, P>(&self, parts: I) -> Result<PathBuf>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let root = self.cleaned_path();
        let file = normalize::join_within(&root, parts)?;
        if file == root {
            return Err(Error::InvalidPath {
                path: file,
                reason: "no file name beneath the output directory".to_string(),
            });
        }

        if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
            Self::create(parent)?;
        }
        Ok(file)
    }

    fn create(dir: &Path) -> Result<()> {
        let existed = dir.is_dir();
        fs::ensure_dir(dir)?;
        if !existed {
            log::info!("created output directory {}", dir.display());
        }
        Ok(())
    }
}
