//! Idempotent directory creation.

use std::fs::DirBuilder;
use std::path::Path;

use crate::error::{Error, Result};

/// Create `path` and any missing ancestors.
///
/// Directories are created with
/// [`DEFAULT_DIR_MODE`](crate::config::DEFAULT_DIR_MODE) on Unix (subject
/// to the process umask). A directory that already exists, including one
/// created concurrently by another process, is success. A path component
/// that exists as something other than a directory is an error.
///
/// # Errors
///
/// Returns [`Error::Filesystem`] carrying `path` if the OS refuses to
/// create any part of it.
///
/// # Examples
///
/// ```no_run
/// use outdir::fs::ensure_dir;
/// use std::path::Path;
///
/// ensure_dir(Path::new("outputs/runs")).unwrap();
/// // A second call is a no-op
/// ensure_dir(Path::new("outputs/runs")).unwrap();
/// ```
pub fn ensure_dir(path: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(crate::config::DEFAULT_DIR_MODE);
    }

    builder
        .create(path)
        .map_err(|e| Error::filesystem(path, e))
}

/// Create the parent directory of `path`, if it has one.
///
/// A bare file name (`report.csv`) has an empty parent, which refers to the
/// current directory and needs no creation.
///
/// # Errors
///
/// Returns [`Error::Filesystem`] carrying the parent path if it cannot be
/// created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => ensure_dir(dir),
        _ => Ok(()),
    }
}
