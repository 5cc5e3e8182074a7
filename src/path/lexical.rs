//! Lexical path normalization and parent-segment detection.
//!
//! Nothing here touches the filesystem. `..` is collapsed against the
//! preceding name purely by string position, so symlinks are not followed.

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path.
///
/// - `.` segments are dropped
/// - redundant separators are collapsed
/// - `name/..` pairs cancel out
/// - `..` directly under a root (`/..`) is dropped, since nothing is above it
/// - leading `..` of a relative path is kept
///
/// An empty result becomes `.`.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use resolve_path::path::normalize;
///
/// assert_eq!(normalize(Path::new("a//b/./c")), PathBuf::from("a/b/c"));
/// assert_eq!(normalize(Path::new("a/b/../c")), PathBuf::from("a/c"));
/// assert_eq!(normalize(Path::new("./a/../../b")), PathBuf::from("../b"));
/// assert_eq!(normalize(Path::new("/../etc")), PathBuf::from("/etc"));
/// assert_eq!(normalize(Path::new("a/..")), PathBuf::from("."));
/// ```
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                parts.push(component);
            },
            Component::CurDir => {},
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                },
                Some(Component::RootDir) => {},
                // A bare drive prefix (`C:..`) or a run of leading `..`
                Some(Component::Prefix(_) | Component::ParentDir | Component::CurDir) | None => {
                    parts.push(component);
                },
            },
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Returns `true` if a single path segment refers to a parent directory.
///
/// Besides the literal `..`, any segment made only of dots and spaces that
/// starts with `..` counts: Windows strips trailing dots and spaces from
/// names, so `...`, `....` and `.. ` can all land on the parent there.
#[must_use]
pub fn is_parent_segment(segment: &str) -> bool {
    segment.starts_with("..") && segment.chars().all(|c| c == '.' || c == ' ')
}

/// Returns `true` if any segment of `path` is a parent-directory segment.
///
/// Segments are split on both `/` and `\`, whatever the host separator is.
///
/// # Examples
///
/// ```
/// use resolve_path::path::has_parent_segment;
///
/// assert!(has_parent_segment("../secret"));
/// assert!(has_parent_segment("a\\..\\b"));
/// assert!(has_parent_segment(".."));
/// assert!(!has_parent_segment("a/b..c/d"));
/// assert!(!has_parent_segment("..hidden"));
/// ```
#[must_use]
pub fn has_parent_segment(path: &str) -> bool {
    path.split(['/', '\\']).any(is_parent_segment)
}
