//! Lexical path cleaning.
//!
//! This module cleans paths without touching the filesystem:
//! - Collapsing duplicate separators and stripping trailing ones
//! - Removing `.` components
//! - Resolving `..` against the preceding component
//!
//! Symlinks are never followed, so `a/link/..` cleans to `a` even when
//! `link` points elsewhere.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Clean a path lexically.
///
/// The absolute-vs-relative nature of the input is preserved. On an
/// absolute path, `..` at the root is dropped. On a relative path, leading
/// `..` components that cannot be resolved are kept. A path that cleans to
/// nothing becomes `.`.
///
/// Separator collapsing and root/prefix handling come from
/// [`Path::components`], so platform conventions are followed.
///
/// # Examples
///
/// ```
/// use outdir::path::normalize::clean;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(clean(Path::new("./outputs")), PathBuf::from("outputs"));
/// assert_eq!(clean(Path::new("custom/../out")), PathBuf::from("out"));
/// assert_eq!(clean(Path::new("a//b/./c/")), PathBuf::from("a/b/c"));
/// assert_eq!(clean(Path::new("../a")), PathBuf::from("../a"));
/// assert_eq!(clean(Path::new("a/..")), PathBuf::from("."));
/// ```
#[must_use]
pub fn clean(path: &Path) -> PathBuf {
    let mut stack: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                stack.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => match stack.last() {
                Some(Component::Normal(_)) => {
                    stack.pop();
                }
                // "/.." is "/"
                Some(Component::RootDir) => {}
                _ => stack.push(component),
            },
        }
    }

    if stack.is_empty() {
        return PathBuf::from(".");
    }

    stack.into_iter().collect()
}

/// Join relative parts onto `root` and clean the result, refusing anything
/// that would leave `root`.
///
/// Every part must be relative and the joined parts must not climb above
/// `root` once cleaned. `a/../b` is accepted, `../b` is not.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if a part is absolute (or carries a
/// drive prefix) or if the parts escape `root`.
///
/// # Examples
///
/// ```
/// use outdir::path::normalize::join_within;
/// use std::path::{Path, PathBuf};
///
/// let joined = join_within(Path::new("./outputs"), ["runs", "2024/./x"]).unwrap();
/// assert_eq!(joined, PathBuf::from("outputs/runs/2024/x"));
///
/// assert!(join_within(Path::new("outputs"), ["../elsewhere"]).is_err());
/// assert!(join_within(Path::new("outputs"), ["/etc"]).is_err());
/// ```
pub fn join_within<I, P>(root: &Path, parts: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut relative = PathBuf::new();

    for part in parts {
        let part = part.as_ref();
        let rooted = part
            .components()
            .any(|c| matches!(c, Component::Prefix(_) | Component::RootDir));
        if rooted {
            return Err(Error::InvalidPath {
                path: part.to_path_buf(),
                reason: "must be relative to the output directory".to_string(),
            });
        }
        relative.push(part);
    }

    let relative = clean(&relative);
    if matches!(relative.components().next(), Some(Component::ParentDir)) {
        return Err(Error::InvalidPath {
            path: relative,
            reason: "climbs above the output directory".to_string(),
        });
    }

    Ok(clean(&root.join(relative)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaned(s: &str) -> PathBuf {
        clean(Path::new(s))
    }

    #[test]
    fn test_clean_default_output_dir() {
        assert_eq!(cleaned("./outputs"), PathBuf::from("outputs"));
    }

    #[test]
    fn test_clean_resolves_parent() {
        assert_eq!(cleaned("custom/../out"), PathBuf::from("out"));
        assert_eq!(cleaned("a/b/../../c"), PathBuf::from("c"));
    }

    #[test]
    fn test_clean_duplicate_and_trailing_separators() {
        assert_eq!(cleaned("a//b///c/"), PathBuf::from("a/b/c"));
        assert_eq!(cleaned("a/b/"), PathBuf::from("a/b"));
    }

    #[test]
    fn test_clean_current_dir_segments() {
        assert_eq!(cleaned("./a/./b/."), PathBuf::from("a/b"));
        assert_eq!(cleaned("."), PathBuf::from("."));
        assert_eq!(cleaned("./"), PathBuf::from("."));
    }

    #[test]
    fn test_clean_empty_input() {
        assert_eq!(cleaned(""), PathBuf::from("."));
    }

    #[test]
    fn test_clean_everything_cancels() {
        assert_eq!(cleaned("a/.."), PathBuf::from("."));
        assert_eq!(cleaned("a/b/../.."), PathBuf::from("."));
    }

    #[test]
    fn test_clean_keeps_leading_parent_on_relative() {
        assert_eq!(cleaned("../a"), PathBuf::from("../a"));
        assert_eq!(cleaned("a/../.."), PathBuf::from(".."));
        assert_eq!(cleaned("../../a/../b"), PathBuf::from("../../b"));
    }

    #[test]
    #[cfg(unix)]
    fn test_clean_absolute() {
        assert_eq!(
            cleaned("/tmp/abs-outputs/./nested/.."),
            PathBuf::from("/tmp/abs-outputs")
        );
        assert_eq!(cleaned("//tmp//x/"), PathBuf::from("/tmp/x"));
    }

    #[test]
    #[cfg(unix)]
    fn test_clean_parent_at_root_is_dropped() {
        assert_eq!(cleaned("/.."), PathBuf::from("/"));
        assert_eq!(cleaned("/../a"), PathBuf::from("/a"));
        assert_eq!(cleaned("/a/../../b"), PathBuf::from("/b"));
        assert_eq!(cleaned("/"), PathBuf::from("/"));
    }

    #[test]
    fn test_join_within_simple() {
        let joined = join_within(Path::new("outputs"), ["runs", "first"]).unwrap();
        assert_eq!(joined, PathBuf::from("outputs/runs/first"));
    }

    #[test]
    fn test_join_within_cleans_root_and_parts() {
        let joined = join_within(Path::new("./outputs/"), ["a/../b", "./c"]).unwrap();
        assert_eq!(joined, PathBuf::from("outputs/b/c"));
    }

    #[test]
    fn test_join_within_no_parts_is_root() {
        let joined = join_within(Path::new("./outputs"), Vec::<&str>::new()).unwrap();
        assert_eq!(joined, PathBuf::from("outputs"));
    }

    #[test]
    fn test_join_within_dot_root() {
        let joined = join_within(Path::new("."), ["file.txt"]).unwrap();
        assert_eq!(joined, PathBuf::from("file.txt"));
    }

    #[test]
    fn test_join_within_rejects_escape() {
        let err = join_within(Path::new("outputs"), ["a", "../../b"]).unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
        assert!(err.to_string().contains("climbs above"));
    }

    #[test]
    #[cfg(unix)]
    fn test_join_within_rejects_absolute_part() {
        let err = join_within(Path::new("outputs"), ["/etc/passwd"]).unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
        assert!(err.to_string().contains("must be relative"));
    }

    // Property-based tests
    #[cfg(unix)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        // Strategy for paths with ., .. and empty (duplicate separator) segments
        fn messy_segments() -> impl Strategy<Value = Vec<String>> {
            prop::collection::vec(
                prop_oneof![
                    Just(".".to_string()),
                    Just("..".to_string()),
                    Just(String::new()),
                    "[a-zA-Z0-9_-]{1,10}".prop_map(|s| s),
                ],
                0..=10,
            )
        }

        proptest! {
            /// Cleaning twice gives the same result as cleaning once
            #[test]
            fn clean_idempotent(parts in messy_segments(), absolute in any::<bool>()) {
                let raw = format!("{}{}", if absolute { "/" } else { "" }, parts.join("/"));
                let once = clean(Path::new(&raw));
                let twice = clean(&once);
                prop_assert_eq!(once, twice);
            }

            /// Absolute inputs stay absolute, relative inputs stay relative
            #[test]
            fn clean_preserves_absoluteness(parts in messy_segments(), absolute in any::<bool>()) {
                let raw = format!("{}{}", if absolute { "/" } else { "" }, parts.join("/"));
                let cleaned = clean(Path::new(&raw));
                prop_assert_eq!(cleaned.is_absolute(), raw.starts_with('/'));
            }

            /// No `.` components survive, except a lone "." result
            #[test]
            fn clean_no_current_dir(parts in messy_segments()) {
                let cleaned = clean(Path::new(&parts.join("/")));
                if cleaned != Path::new(".") {
                    for component in cleaned.components() {
                        prop_assert_ne!(component, Component::CurDir);
                    }
                }
            }

            /// `..` only appears as a prefix of relative results
            #[test]
            fn clean_parent_dirs_only_leading(parts in messy_segments(), absolute in any::<bool>()) {
                let raw = format!("{}{}", if absolute { "/" } else { "" }, parts.join("/"));
                let cleaned = clean(Path::new(&raw));
                let rooted = raw.starts_with('/');
                let mut seen_normal = false;
                for component in cleaned.components() {
                    match component {
                        Component::ParentDir => {
                            prop_assert!(!rooted);
                            prop_assert!(!seen_normal);
                        }
                        Component::Normal(_) => seen_normal = true,
                        _ => {}
                    }
                }
            }

            /// Plain segment lists survive cleaning unchanged
            #[test]
            fn clean_plain_paths_unchanged(parts in prop::collection::vec("[a-zA-Z0-9_-]{1,10}", 1..=5)) {
                let raw = parts.join("/");
                prop_assert_eq!(clean(Path::new(&raw)), PathBuf::from(&raw));
            }
        }
    }
}
