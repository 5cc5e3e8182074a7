//! Fuzz target for `resolve_path_in` - root-bounded resolution.
//!
//! This fuzzer tests that:
//! 1. No input causes a panic
//! 2. Accepted outputs always stay under the root
//! 3. Each rejection kind is backed by the pattern it claims
//!
//! Run with: `cargo +nightly fuzz run fuzz_resolve_path`

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use resolve_path::path::{has_parent_segment, normalize};
use resolve_path::{resolve_path_in, Error, MaliciousReason};
use std::path::{Path, PathBuf};

/// Structured input for more targeted fuzzing.
#[derive(Arbitrary, Debug)]
struct PathInput {
    /// Raw path string to test
    path: String,
    /// Whether to inject a null byte
    inject_null: bool,
    /// Whether to prefix parent-directory segments
    inject_traversal: bool,
    /// Number of `..` segments to inject
    traversal_depth: u8,
    /// Use `\` instead of `/` for injected segments
    backslash: bool,
}

impl PathInput {
    /// Build the final path string for testing.
    fn build(&self) -> String {
        let mut result = self.path.clone();

        if self.inject_null {
            let mut pos = result.len() / 2;
            while !result.is_char_boundary(pos) {
                pos -= 1;
            }
            result.insert(pos, '\0');
        }

        if self.inject_traversal {
            let sep = if self.backslash { "\\" } else { "/" };
            let traversal = format!("..{sep}").repeat(self.traversal_depth as usize);
            result = format!("{traversal}{result}");
        }

        result
    }
}

fn root() -> PathBuf {
    normalize(&std::env::temp_dir().join("fuzz-root"))
}

fuzz_target!(|data: PathInput| {
    let path = data.build();
    let root = root();

    match resolve_path_in(&root, &path) {
        Ok(resolved) => {
            // INVARIANT 1: Accepted output never leaves the root
            assert!(
                resolved.starts_with(&root),
                "resolved {:?} outside root {:?} for input {:?}",
                resolved,
                root,
                path
            );

            // INVARIANT 2: Accepted input had no NUL byte
            assert!(!path.contains('\0'), "NUL accepted: {:?}", path);

            // INVARIANT 3: Output is already normalized
            assert_eq!(normalize(&resolved), resolved);
        }
        Err(Error::MaliciousPath {
            reason: MaliciousReason::NullByte,
            ..
        }) => {
            assert!(path.contains('\0'), "NullByte but no NUL in {:?}", path);
        }
        Err(Error::MaliciousPath {
            reason: MaliciousReason::AbsolutePath,
            ..
        }) => {
            let looks_absolute = path.starts_with(['/', '\\'])
                || (path.len() >= 2 && path.as_bytes()[1] == b':');
            assert!(looks_absolute, "AbsolutePath but relative: {:?}", path);
        }
        Err(Error::PathOutsideRoot { .. }) => {
            let normalized = normalize(Path::new(&format!(".{}{}", std::path::MAIN_SEPARATOR, path)));
            assert!(
                has_parent_segment(&normalized.to_string_lossy()),
                "PathOutsideRoot but no parent segment in {:?}",
                path
            );
        }
        Err(e) => panic!("unexpected error for {:?}: {}", path, e),
    }
});
