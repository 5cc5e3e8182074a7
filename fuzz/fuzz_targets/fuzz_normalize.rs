//! Fuzz target for lexical `normalize`.
//!
//! This fuzzer tests that:
//! 1. No input causes a panic
//! 2. Normalization is idempotent
//! 3. Output never contains `.` segments (other than a lone `.`)
//!
//! Run with: `cargo +nightly fuzz run fuzz_normalize`

#![no_main]

use libfuzzer_sys::fuzz_target;
use resolve_path::path::normalize;
use std::path::{Component, Path};

fuzz_target!(|input: &str| {
    let once = normalize(Path::new(input));
    let twice = normalize(&once);
    assert_eq!(once, twice, "not idempotent for {:?}", input);

    if once != Path::new(".") {
        assert!(
            !once.components().any(|c| c == Component::CurDir),
            "CurDir survived in {:?} from {:?}",
            once,
            input
        );
    }
});
