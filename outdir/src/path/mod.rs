//! Lexical path handling for the output directory.
//!
//! # Key Concepts
//!
//! ## Cleaning
//!
//! Cleaning converts a path to its shortest lexical equivalent by:
//! - Collapsing duplicate separators and removing trailing ones
//! - Removing `.` components
//! - Resolving `..` components against the preceding component
//!
//! Cleaning never consults the filesystem. A relative path stays relative
//! and an absolute path stays absolute; symlinks are left alone.
//!
//! ## Containment
//!
//! Helpers that build paths *inside* the output directory use
//! [`normalize::join_within`], which rejects absolute parts and parts that
//! climb out of the directory.
//!
//! # Examples
//!
//! ```
//! use outdir::path::clean;
//! use std::path::{Path, PathBuf};
//!
//! assert_eq!(clean(Path::new("custom/../out")), PathBuf::from("out"));
//! ```

pub mod normalize;

pub use normalize::{clean, join_within};
