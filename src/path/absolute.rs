//! Absolute-path predicates for both platform conventions.
//!
//! These are plain string tests. They never consult [`Path::is_absolute`],
//! which only knows the rules of the host it was compiled for: a request
//! path like `C:\Windows` is harmless-looking on Linux but becomes an
//! absolute path the moment it reaches a Windows host (or a library that
//! normalizes Windows markers).
//!
//! [`Path::is_absolute`]: std::path::Path::is_absolute
//!
//! # Examples
//!
//! ```
//! use resolve_path::path::{is_posix_absolute, is_windows_absolute};
//!
//! assert!(is_posix_absolute("/etc/passwd"));
//! assert!(!is_posix_absolute("etc/passwd"));
//!
//! assert!(is_windows_absolute("C:\\Windows"));
//! assert!(is_windows_absolute("\\\\server\\share"));
//! assert!(is_windows_absolute("\\temp"));
//! assert!(!is_windows_absolute("temp\\file.txt"));
//! ```

/// Returns `true` if `path` is absolute under POSIX rules (leading `/`).
#[must_use]
pub fn is_posix_absolute(path: &str) -> bool {
    path.starts_with('/')
}

/// Returns `true` if `path` is absolute, or drive-qualified, under Windows rules.
///
/// Matches:
/// - a leading separator, `\` or `/` (root of the current drive)
/// - a UNC prefix, `\\server\share` or `//server/share`
/// - a drive letter followed by a colon, `C:\x` and also `C:x`
///
/// `C:x` is drive-relative rather than absolute on Windows, but joining it
/// onto a root replaces the root's drive, so it is treated the same way.
#[must_use]
pub fn is_windows_absolute(path: &str) -> bool {
    has_leading_separator(path) || is_unc(path) || has_drive_prefix(path)
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

fn has_leading_separator(path: &str) -> bool {
    path.starts_with(is_separator)
}

// Two separators, a non-empty server name, then another separator.
fn is_unc(path: &str) -> bool {
    let mut chars = path.chars();
    if !(chars.next().is_some_and(is_separator) && chars.next().is_some_and(is_separator)) {
        return false;
    }
    let rest = chars.as_str();
    match rest.find(is_separator) {
        Some(pos) => pos > 0,
        None => false,
    }
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
