//! End-to-end resolution tests through the public API.
//!
//! Run with:
//! ```bash
//! cargo test --test resolve_tests
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};
use std::thread;

use resolve_path::config::Config;
use resolve_path::path::normalize;
use resolve_path::{
    Argument, Error, ErrorKind, FixedWorkingDir, MaliciousReason, PathResolver, resolve_path,
    resolve_path_in, try_resolve_path,
};

static TRACING: Once = Once::new();

/// Route resolver logs to the test writer so rejected paths show up in failures.
fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("resolve_path=trace"))
            .with_test_writer()
            .try_init();
    });
}

fn test_root() -> PathBuf {
    normalize(&std::env::temp_dir().join("resolve-path-root"))
}

// =============================================================================
// Concrete cases
// =============================================================================

#[cfg(unix)]
#[test]
fn test_index_html() {
    init_tracing();
    assert_eq!(
        resolve_path_in("/var/www", "index.html").unwrap(),
        PathBuf::from("/var/www/index.html")
    );
}

#[cfg(unix)]
#[test]
fn test_dot_segments_collapse() {
    init_tracing();
    assert_eq!(
        resolve_path_in("/var/www", "a/b/../c").unwrap(),
        PathBuf::from("/var/www/a/c")
    );
}

#[test]
fn test_parent_escape_is_forbidden() {
    init_tracing();
    let err = resolve_path_in("/var/www", "../etc/passwd").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PathOutsideRoot);
    assert_eq!(err.status_code(), Some(403));
}

#[test]
fn test_absolute_is_malicious() {
    init_tracing();
    let err = resolve_path_in("/var/www", "/etc/passwd").unwrap_err();
    assert!(matches!(
        err,
        Error::MaliciousPath {
            reason: MaliciousReason::AbsolutePath,
            ..
        }
    ));
    assert_eq!(err.status_code(), Some(400));
}

#[test]
fn test_null_byte_is_malicious() {
    init_tracing();
    let err = resolve_path_in("/var/www", "x\u{0}y").unwrap_err();
    assert!(matches!(
        err,
        Error::MaliciousPath {
            reason: MaliciousReason::NullByte,
            ..
        }
    ));
    assert_eq!(err.status_code(), Some(400));
}

#[test]
fn test_missing_root_is_invalid_argument() {
    let err = try_resolve_path(None, Some("a")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.status_code(), None);
    assert_eq!(err.to_string(), "argument root_path is required");
}

#[test]
fn test_missing_relative_is_invalid_argument() {
    let err = try_resolve_path(Some(Path::new("/var/www")), None).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidArgument {
            argument: Argument::RelativePath
        }
    ));
}

// =============================================================================
// Cross-platform attack strings
// =============================================================================

#[test]
fn test_windows_attacks_rejected_on_every_host() {
    init_tracing();
    let root = test_root();
    let cases = [
        ("C:\\Windows\\win.ini", ErrorKind::MaliciousPath),
        ("c:/windows", ErrorKind::MaliciousPath),
        ("C:relative", ErrorKind::MaliciousPath),
        ("\\\\server\\share\\x", ErrorKind::MaliciousPath),
        ("\\x", ErrorKind::MaliciousPath),
        ("..\\secret", ErrorKind::PathOutsideRoot),
        ("a\\..\\..\\secret", ErrorKind::PathOutsideRoot),
        ("a/..\\..\\secret", ErrorKind::PathOutsideRoot),
    ];
    for (path, expected) in cases {
        let err = resolve_path_in(&root, path).expect_err(path);
        assert_eq!(err.kind(), expected, "{path:?}");
    }
}

#[test]
fn test_dot_run_segments_rejected() {
    init_tracing();
    let root = test_root();
    for path in ["....//....//etc", ".../x", "a/.. /b"] {
        let err = resolve_path_in(&root, path).expect_err(path);
        assert_eq!(err.kind(), ErrorKind::PathOutsideRoot, "{path:?}");
    }
}

#[test]
fn test_escape_then_return_still_rejected() {
    let root = test_root();
    let name = root
        .file_name()
        .and_then(|n| n.to_str())
        .expect("temp root has a name");
    let err = resolve_path_in(&root, &format!("../{name}/x")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PathOutsideRoot);
}

#[test]
fn test_accepted_paths_stay_under_root() {
    init_tracing();
    let root = test_root();
    for path in ["a/b", "./a/../b", "a//b", "", ".", "a/.", "..hidden", "b..", "x/y/../z"] {
        let resolved = resolve_path_in(&root, path).expect(path);
        assert!(resolved.starts_with(&root), "{path:?} -> {resolved:?}");
    }
}

// =============================================================================
// Working directory default
// =============================================================================

#[test]
fn test_omitted_root_matches_current_dir() {
    let cwd = std::env::current_dir().unwrap();
    for path in ["a", "a/b/../c", "../x", "/abs", ""] {
        let implicit = resolve_path(path);
        let explicit = resolve_path_in(&cwd, path);
        match (implicit, explicit) {
            (Ok(a), Ok(b)) => assert_eq!(a, b, "{path:?}"),
            (Err(a), Err(b)) => assert_eq!(a.kind(), b.kind(), "{path:?}"),
            (a, b) => panic!("{path:?}: {a:?} vs {b:?}"),
        }
    }
}

#[test]
fn test_injected_working_dir() {
    let base = test_root();
    let resolver = PathResolver::new("public").with_working_dir(FixedWorkingDir(base.clone()));
    assert_eq!(
        resolver.resolve("css/site.css").unwrap(),
        base.join("public").join("css").join("site.css")
    );
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_resolver_from_config() {
    let root = test_root();
    let toml = format!(
        "[resolver]\nroot = {}\n",
        toml_string(&root.to_string_lossy())
    );
    let config = Config::from_toml_str(&toml).unwrap();
    let resolver = config.resolver.resolver();

    assert_eq!(resolver.resolve("a").unwrap(), root.join("a"));
    assert_eq!(
        resolver.resolve("../a").unwrap_err().kind(),
        ErrorKind::PathOutsideRoot
    );
}

// Literal TOML string, so Windows backslashes need no escaping.
fn toml_string(s: &str) -> String {
    format!("'{s}'")
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_shared_resolver_across_threads() {
    let root = test_root();
    let resolver = Arc::new(PathResolver::new(root.clone()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let resolver = Arc::clone(&resolver);
            let root = root.clone();
            thread::spawn(move || {
                for j in 0..100 {
                    let ok = resolver.resolve(&format!("t{i}/f{j}")).unwrap();
                    assert!(ok.starts_with(&root));
                    let err = resolver.resolve(&format!("t{i}/../../f{j}")).unwrap_err();
                    assert_eq!(err.kind(), ErrorKind::PathOutsideRoot);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("resolver thread panicked");
    }
}
