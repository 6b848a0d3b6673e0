//! Behavioral specs for fatal errors.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Missing closing delimiter is fatal
#[test]
fn unterminated_escape_fails() {
    prep_cmd()
        .write_stdin("!p(1+1")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("Escape reached EOF"));
}

/// Unknown escape names the marker
#[test]
fn unknown_escape_fails() {
    prep_cmd()
        .write_stdin("!foo(x)")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("Unknown escape: !foo"));
}

/// Unknown escape with a line delimiter names marker and delimiter
#[test]
fn unknown_line_escape_fails() {
    prep_cmd()
        .write_stdin("!todo.. later\n")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("Unknown escape+delimiter: !todo.. "));
}

/// Strict print does not fall back to running statements
#[test]
fn print_of_statement_fails() {
    prep_cmd()
        .write_stdin("!p(let x = 1)")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("evaluation failed"));
}

/// Output before the failing escape is still written
#[test]
fn output_before_error_is_flushed() {
    prep_cmd()
        .write_stdin("kept !(1) then !e(throw \"stop\") lost")
        .assert()
        .code(2)
        .stdout("kept 1 then ")
        .stderr(predicates::str::contains("stop"));
}
