//! Pure string and path utilities used by the resolver.
//!
//! - [`is_posix_absolute`], [`is_windows_absolute`] - absoluteness under each convention
//! - [`normalize`] - lexical normalization
//! - [`has_parent_segment`] - parent-segment detection on either separator
//!
//! They are public so that callers can apply exactly the same rules in
//! their own pre-checks.

mod absolute;
mod lexical;

pub use absolute::{is_posix_absolute, is_windows_absolute};
pub use lexical::{has_parent_segment, is_parent_segment, normalize};
