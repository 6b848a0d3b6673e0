//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the prep binary over a template.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

/// Returns a Command configured to run the prep binary
pub fn prep_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("prep"));
    cmd.env_remove("PREP_DEBUG").env_remove("PREP_LOG");
    cmd
}

/// Run the binary over `input` and return stdout, asserting success.
pub fn expand(input: &str) -> String {
    let output = prep_cmd().write_stdin(input).output().expect("command should run");
    assert!(
        output.status.success(),
        "expected success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be UTF-8")
}

/// Get path to a test fixture file
pub fn fixture(name: &str) -> std::path::PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    std::path::PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}
