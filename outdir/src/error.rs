//! Error types for the outdir library.
//!
//! Directory creation is the only fallible step of output directory
//! resolution, so the hierarchy is small. Errors are built with `thiserror`
//! and always carry the path that was being worked on.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with an outdir error.
///
/// # Examples
///
/// ```
/// use outdir::{Error, Result};
/// use std::path::PathBuf;
///
/// fn example_operation() -> Result<PathBuf> {
///     Ok(PathBuf::from("outputs"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the outdir library.
#[derive(Debug, Error)]
pub enum Error {
    /// Creating a directory failed at the OS level.
    ///
    /// Raised for permission problems, a path component that exists as a
    /// non-directory, exhausted disk or quota, and any other I/O failure.
    #[error("failed to create directory {}: {source}", path.display())]
    Filesystem {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// A path handed to an output helper was rejected.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },
}

impl Error {
    /// Wrap an I/O error with the directory it was raised for.
    pub(crate) fn filesystem(path: &Path, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path this error is about.
    ///
    /// # Examples
    ///
    /// ```
    /// use outdir::Error;
    /// use std::path::{Path, PathBuf};
    ///
    /// let err = Error::InvalidPath {
    ///     path: PathBuf::from("/etc"),
    ///     reason: "absolute".to_string(),
    /// };
    /// assert_eq!(err.path(), Path::new("/etc"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Filesystem { path, .. } | Self::InvalidPath { path, .. } => path,
        }
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            Self::Filesystem { source, .. } if source.kind() == io::ErrorKind::PermissionDenied
        )
    }

    /// Check if error comes from a path component that exists but is not a
    /// directory.
    ///
    /// Depending on where the collision sits, the OS reports either
    /// "already exists" (the target itself is a file) or "not a directory"
    /// (an ancestor is a file). Both are mapped here.
    #[must_use]
    pub fn is_not_a_directory(&self) -> bool {
        match self {
            Self::Filesystem { source, .. } => {
                source.kind() == io::ErrorKind::AlreadyExists || is_enotdir(source)
            }
            Self::InvalidPath { .. } => false,
        }
    }
}

#[cfg(unix)]
fn is_enotdir(err: &io::Error) -> bool {
    // ENOTDIR is 20 on every Unix we target.
    err.raw_os_error() == Some(20)
}

#[cfg(not(unix))]
fn is_enotdir(_err: &io::Error) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_filesystem_error_display() {
        let err = Error::filesystem(
            Path::new("/restricted/outputs"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let display = format!("{err}");
        assert!(display.contains("failed to create directory"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/restricted/outputs"));
        assert!(display.contains("denied"));
    }

    #[test]
    fn test_filesystem_error_source() {
        let err = Error::filesystem(
            Path::new("outputs"),
            io::Error::new(io::ErrorKind::Other, "disk full"),
        );
        let source = err.source().expect("filesystem errors carry a source");
        assert_eq!(source.to_string(), "disk full");
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("../escape"),
            reason: "climbs above the output directory".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        assert!(display.contains("escape"));
        assert!(display.contains("climbs above"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_is_permission_denied() {
        let err = Error::filesystem(
            Path::new("x"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.is_permission_denied());
        assert!(!err.is_not_a_directory());
    }

    #[test]
    fn test_is_not_a_directory() {
        let err = Error::filesystem(
            Path::new("x"),
            io::Error::new(io::ErrorKind::AlreadyExists, "exists"),
        );
        assert!(err.is_not_a_directory());
        assert!(!err.is_permission_denied());
    }

    #[test]
    fn test_path_accessor() {
        let err = Error::filesystem(Path::new("a/b"), io::Error::new(io::ErrorKind::Other, "x"));
        assert_eq!(err.path(), Path::new("a/b"));
    }
}
