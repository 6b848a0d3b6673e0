//! Behavioral specs for invocation and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use similar_asserts::assert_eq;

use crate::prelude::*;

/// Exit code 0 when invoked with --help
#[test]
fn help_exits_successfully() {
    prep_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("prep").and(predicates::str::contains("!exec")));
}

/// Any other argument is a bad invocation
#[test]
fn unexpected_argument_exits_with_usage() {
    prep_cmd()
        .arg("input.txt")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("Usage"));
}

/// Help alongside another argument is a bad invocation
#[test]
fn help_with_extra_argument_exits_with_usage() {
    prep_cmd()
        .args(["--help", "foo"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicates::str::contains("Usage"));
}

/// Empty stdin produces empty stdout
#[test]
fn empty_input_produces_empty_output() {
    prep_cmd().write_stdin("").assert().success().stdout("");
}

/// Text without escapes passes through unchanged
#[test]
fn plain_text_is_unchanged() {
    let input = "line one\n  (parens) and dots ..\n\ttabbed\n";
    assert_eq!(expand(input), input);
}

/// CRLF and CR line endings are read as plain newlines
#[test]
fn crlf_input_is_normalized() {
    assert_eq!(expand("a\r\n!dnl(x)\r\nb\r\n"), "a\nb\n");
    assert_eq!(expand("top\r\n!b(1)\r\n\r\nbottom\r"), "top\n1\n\nbottom\n");
}

/// A fixture template expands to its expected output
#[test]
fn fixture_template_expands() {
    let input = std::fs::read_to_string(fixture("greeting.tmpl")).unwrap();
    let expected = std::fs::read_to_string(fixture("greeting.expected")).unwrap();
    assert_eq!(expand(&input), expected);
}

/// PREP_DEBUG annotates matches instead of running them
#[test]
fn debug_mode_annotates_matches() {
    prep_cmd()
        .env("PREP_DEBUG", "1")
        .write_stdin("a !e(throw 1) b")
        .assert()
        .success()
        .stdout("a <escape=!e><delimiter=(><esc=throw 1><delimiter=)> b");
}
