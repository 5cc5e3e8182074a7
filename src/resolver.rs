//! Root-bounded path resolution.
//!
//! [`PathResolver::resolve`] runs a relative path through a fixed sequence
//! of checks and, if every check passes, joins it onto the root:
//!
//! 1. NUL byte anywhere → [`Error::MaliciousPath`]
//! 2. absolute under POSIX or Windows rules → [`Error::MaliciousPath`]
//! 3. `"." + separator + path` normalizes to something with a `..`
//!    segment → [`Error::PathOutsideRoot`]
//! 4. normalize `absolute(root) / path` and return it
//!
//! The order is part of the contract: the first failing check decides the
//! reported error. Invalid paths are rejected, never repaired.
//!
//! # Examples
//!
//! ```
//! # #[cfg(unix)] {
//! use std::path::PathBuf;
//! use resolve_path::{ErrorKind, resolve_path_in};
//!
//! let path = resolve_path_in("/var/www", "css/../index.html").unwrap();
//! assert_eq!(path, PathBuf::from("/var/www/index.html"));
//!
//! let err = resolve_path_in("/var/www", "../etc/passwd").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::PathOutsideRoot);
//! assert_eq!(err.status_code(), Some(403));
//! # }
//! ```

use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use tracing::{trace, warn};

use crate::error::{Argument, Error, MaliciousReason, Result};
use crate::path::{has_parent_segment, is_posix_absolute, is_windows_absolute, normalize};

/// Source of the directory a missing or relative root is resolved against.
pub trait WorkingDir {
    /// Return the current working directory.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the directory cannot be determined.
    fn current_dir(&self) -> io::Result<PathBuf>;
}

/// Reads the process working directory at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessWorkingDir;

impl WorkingDir for ProcessWorkingDir {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// A fixed working directory, for tests and sandboxed callers.
///
/// The path must be absolute; a relative one fails resolution with
/// [`Error::WorkingDir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedWorkingDir(pub PathBuf);

impl WorkingDir for FixedWorkingDir {
    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.0.clone())
    }
}

impl<W: WorkingDir + ?Sized> WorkingDir for &W {
    fn current_dir(&self) -> io::Result<PathBuf> {
        (**self).current_dir()
    }
}

/// Resolves untrusted relative paths under a trusted root.
///
/// Holds no mutable state, so one resolver can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PathResolver<W = ProcessWorkingDir> {
    root: Option<PathBuf>,
    working_dir: W,
}

impl PathResolver {
    /// Resolver bounded by `root`.
    ///
    /// A relative `root` is taken relative to the working directory at each
    /// call, not at construction.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            working_dir: ProcessWorkingDir,
        }
    }

    /// Resolver bounded by the working directory at each call.
    #[must_use]
    pub fn current_dir() -> Self {
        Self::default()
    }
}

impl<W: WorkingDir> PathResolver<W> {
    /// Replace the working-directory source.
    pub fn with_working_dir<V: WorkingDir>(self, working_dir: V) -> PathResolver<V> {
        PathResolver {
            root: self.root,
            working_dir,
        }
    }

    /// The configured root, or `None` when the working directory is used.
    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Validate `relative_path` and join it onto the root.
    ///
    /// Any segment that starts with `..` and holds only dots and spaces
    /// (`...`, `....`, `.. `) counts as a parent segment, on every host.
    /// Such names are legal on POSIX filesystems but are refused here.
    ///
    /// # Errors
    ///
    /// - [`Error::MaliciousPath`] if the path contains a NUL byte or is absolute
    /// - [`Error::PathOutsideRoot`] if it normalizes outside the root
    /// - [`Error::WorkingDir`] if the working directory is needed and is
    ///   unreadable or not absolute
    pub fn resolve(&self, relative_path: &str) -> Result<PathBuf> {
        validate(relative_path)?;
        let root = absolute_root(&self.working_dir, self.root.as_deref())?;
        Ok(join(&root, relative_path))
    }
}

/// Resolve `relative_path` against the process working directory.
///
/// # Errors
///
/// See [`PathResolver::resolve`].
pub fn resolve_path(relative_path: &str) -> Result<PathBuf> {
    PathResolver::current_dir().resolve(relative_path)
}

/// Resolve `relative_path` against `root_path`.
///
/// # Errors
///
/// See [`PathResolver::resolve`].
pub fn resolve_path_in(root_path: impl AsRef<Path>, relative_path: &str) -> Result<PathBuf> {
    PathResolver::new(root_path.as_ref()).resolve(relative_path)
}

/// Resolve with arguments that may be missing.
///
/// For callers whose inputs come from optional sources (deserialized
/// requests, FFI). A missing argument is a caller bug and is reported as
/// [`Error::InvalidArgument`] before any path checks run.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for a missing argument, otherwise see
/// [`PathResolver::resolve`].
pub fn try_resolve_path(root_path: Option<&Path>, relative_path: Option<&str>) -> Result<PathBuf> {
    let root_path = root_path.ok_or_else(|| Error::missing(Argument::RootPath))?;
    let relative_path = relative_path.ok_or_else(|| Error::missing(Argument::RelativePath))?;
    resolve_path_in(root_path, relative_path)
}

fn absolute_root<W: WorkingDir + ?Sized>(working_dir: &W, root: Option<&Path>) -> Result<PathBuf> {
    match root {
        Some(root) if root.is_absolute() => Ok(root.to_path_buf()),
        Some(root) => Ok(absolute_working_dir(working_dir)?.join(root)),
        None => absolute_working_dir(working_dir),
    }
}

fn absolute_working_dir<W: WorkingDir + ?Sized>(working_dir: &W) -> Result<PathBuf> {
    let dir = working_dir.current_dir().map_err(Error::working_dir)?;
    if !dir.is_absolute() {
        return Err(Error::working_dir(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("working directory is not absolute: {}", dir.display()),
        )));
    }
    Ok(dir)
}

fn join(root: &Path, relative_path: &str) -> PathBuf {
    let resolved = normalize(&root.join(relative_path));
    trace!(
        root = %root.display(),
        path = ?relative_path,
        resolved = %resolved.display(),
        "Resolved path"
    );
    resolved
}

fn validate(relative_path: &str) -> Result<()> {
    if relative_path.contains('\0') {
        return Err(reject_malicious(relative_path, MaliciousReason::NullByte));
    }

    if is_posix_absolute(relative_path) || is_windows_absolute(relative_path) {
        return Err(reject_malicious(relative_path, MaliciousReason::AbsolutePath));
    }

    let anchored = format!(".{MAIN_SEPARATOR}{relative_path}");
    let normalized = normalize(Path::new(&anchored));
    if has_parent_segment(&normalized.to_string_lossy()) {
        warn!(
            security_event = "path_traversal",
            path = ?relative_path,
            normalized = %normalized.display(),
            reason = "outside_root",
            "Blocked path escaping root"
        );
        return Err(Error::outside_root(relative_path));
    }

    Ok(())
}

fn reject_malicious(relative_path: &str, reason: MaliciousReason) -> Error {
    warn!(
        security_event = "path_traversal",
        path = ?relative_path,
        reason = reason.as_str(),
        "Blocked malicious path"
    );
    Error::malicious(relative_path, reason)
}
