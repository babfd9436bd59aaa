//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - Test environment setup with a temporary working directory
//! - Command builder helpers that isolate the process environment

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated working directory.
///
/// Every command runs with the temporary directory as its current working
/// directory and with `OUTPUT_DIR` and `OUTDIR_LOG_MODE` removed, so the
/// caller's environment cannot leak in.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running inside the test directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("outdir").expect("Failed to find outdir binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("OUTPUT_DIR")
            .env_remove("OUTDIR_LOG_MODE");
        cmd
    }

    /// Get a command builder with `OUTPUT_DIR` set.
    pub fn command_with_env(&self, output_dir: &str) -> Command {
        let mut cmd = self.command();
        cmd.env("OUTPUT_DIR", output_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a regular file in the test environment.
    pub fn create_file(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, b"not a directory").expect("Failed to create test file");
        path
    }

    /// Create a directory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }
}

/// Stdout of a finished command, trimmed of its trailing newline.
#[allow(dead_code)]
pub fn stdout_line(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}
