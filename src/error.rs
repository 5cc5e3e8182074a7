//! Error types for path resolution.
//!
//! Every failure of [`resolve_path`](crate::resolve_path) and friends is one
//! of a small closed set of variants. Callers pick a response from
//! [`Error::kind`] or [`Error::status_code`] instead of matching on messages.

use std::fmt;

/// Result type for resolution operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a relative path was rejected as malicious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaliciousReason {
    /// Path contains a NUL byte.
    NullByte,
    /// Path is absolute under POSIX or Windows rules.
    AbsolutePath,
}

impl MaliciousReason {
    /// Short machine-friendly label, used as the `reason` field in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NullByte => "null_byte",
            Self::AbsolutePath => "absolute_path",
        }
    }
}

impl fmt::Display for MaliciousReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullByte => write!(f, "path contains null bytes"),
            Self::AbsolutePath => write!(f, "absolute paths are not allowed"),
        }
    }
}

/// Name of a resolver argument, for [`Error::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    RootPath,
    RelativePath,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootPath => write!(f, "root_path"),
            Self::RelativePath => write!(f, "relative_path"),
        }
    }
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller omitted a required argument. A programming error.
    InvalidArgument,
    /// The relative path is forbidden outright.
    MaliciousPath,
    /// The relative path escapes the root once normalized.
    PathOutsideRoot,
    /// The process working directory could not be read.
    WorkingDir,
}

/// Resolution errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A required argument was missing.
    #[error("argument {argument} is required")]
    InvalidArgument { argument: Argument },

    /// The relative path contains a NUL byte or is absolute.
    #[error("malicious path {path:?}: {reason}")]
    MaliciousPath {
        path: String,
        reason: MaliciousReason,
    },

    /// The relative path normalizes to a location outside the root.
    #[error("path {path:?} escapes the root directory")]
    PathOutsideRoot { path: String },

    /// Defaulting the root to the working directory failed.
    #[error("cannot read current working directory: {source}")]
    WorkingDir {
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn missing(argument: Argument) -> Self {
        Self::InvalidArgument { argument }
    }

    pub(crate) fn malicious(path: impl Into<String>, reason: MaliciousReason) -> Self {
        Self::MaliciousPath {
            path: path.into(),
            reason,
        }
    }

    pub(crate) fn outside_root(path: impl Into<String>) -> Self {
        Self::PathOutsideRoot { path: path.into() }
    }

    pub(crate) fn working_dir(source: std::io::Error) -> Self {
        Self::WorkingDir { source }
    }

    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::MaliciousPath { .. } => ErrorKind::MaliciousPath,
            Self::PathOutsideRoot { .. } => ErrorKind::PathOutsideRoot,
            Self::WorkingDir { .. } => ErrorKind::WorkingDir,
        }
    }

    /// HTTP status a server should answer with, if the error is the client's fault.
    ///
    /// Argument and working-directory errors are server-side bugs and have no
    /// client status; map them to a 500 or a panic as the caller sees fit.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::MaliciousPath { .. } => Some(400),
            Self::PathOutsideRoot { .. } => Some(403),
            Self::InvalidArgument { .. } | Self::WorkingDir { .. } => None,
        }
    }

    /// Reason phrase to pair with [`status_code`](Self::status_code).
    ///
    /// Deliberately vague: the offending path is never echoed back.
    #[must_use]
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            Self::MaliciousPath { .. } => Some("Malicious Path"),
            Self::PathOutsideRoot { .. } => Some("Forbidden"),
            Self::InvalidArgument { .. } | Self::WorkingDir { .. } => None,
        }
    }

    /// Whether the error was caused by untrusted input rather than the caller.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_some()
    }
}
