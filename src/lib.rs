//! Resolve an untrusted relative path against a trusted root directory.
//!
//! This is the check a static file server, template loader, or download
//! handler runs before touching the filesystem. A relative path taken from
//! a request is rejected if it
//!
//! - contains a NUL byte ([`ErrorKind::MaliciousPath`], 400)
//! - is absolute under POSIX *or* Windows rules ([`ErrorKind::MaliciousPath`], 400)
//! - normalizes to something above the root ([`ErrorKind::PathOutsideRoot`], 403)
//!
//! and otherwise joined onto the root and lexically normalized. No
//! filesystem access happens: the result may not exist, may be a
//! directory, and symlinks under the root are not resolved.
//!
//! # Examples
//!
//! ```
//! # #[cfg(unix)] {
//! use std::path::PathBuf;
//! use resolve_path::{ErrorKind, PathResolver};
//!
//! let resolver = PathResolver::new("/var/www");
//!
//! assert_eq!(
//!     resolver.resolve("a/b/../c").unwrap(),
//!     PathBuf::from("/var/www/a/c")
//! );
//!
//! let err = resolver.resolve("/etc/passwd").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MaliciousPath);
//! assert_eq!(err.status_code(), Some(400));
//! # }
//! ```

pub mod config;
mod error;
pub mod path;
mod resolver;

pub use error::{Argument, Error, ErrorKind, MaliciousReason, Result};
pub use resolver::{
    FixedWorkingDir, PathResolver, ProcessWorkingDir, WorkingDir, resolve_path, resolve_path_in,
    try_resolve_path,
};
