//! Behavioral specs for each escape form.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use similar_asserts::assert_eq;

use crate::prelude::*;

// =============================================================================
// Evaluate / execute
// =============================================================================

/// `!( )` prints an expression's value in place
#[test]
fn generic_prints_value() {
    assert_eq!(expand("a !(1+1) b"), "a 2 b");
}

/// `!( )` falls back to running statements
#[test]
fn generic_runs_statements() {
    assert_eq!(expand("!(let x = 5)x is !(x)"), "x is 5");
}

/// `!exec` runs statements and `!print` reads the result
#[test]
fn exec_then_print() {
    assert_eq!(expand("!exec(let x = 5)!print(x)"), "5");
    assert_eq!(expand("!e(let y = 2)!p(y * 3)"), "6");
}

/// Statements can write output through print
#[test]
fn exec_output_goes_to_stdout() {
    assert_eq!(expand("!e(print(\"hi\"))done"), "hi\ndone");
}

/// Definitions persist across fragments
#[test]
fn functions_persist() {
    let input = "!e(((\nfn square(n) { n * n }\n)))!p(square(7))";
    assert_eq!(expand(input), "49");
}

/// Triple parens allow unbalanced single parens inside
#[test]
fn triple_parens_allow_unbalanced_content() {
    assert_eq!(expand("!p(((\")\" + \"(\")))"), ")(");
}

// =============================================================================
// Comments and newline suppression
// =============================================================================

/// Comments disappear along with the padding before them
#[test]
fn comment_is_discarded() {
    assert_eq!(expand("foo !c(hidden) bar"), "foo bar");
    assert_eq!(expand("foo !comment(a (nested) note) bar"), "foo bar");
}

/// Line comments run to the end of the line
#[test]
fn line_comment_keeps_newline() {
    assert_eq!(expand("value = 1 !c.. explain\nnext\n"), "value = 1\nnext\n");
}

/// `!dnl` removes itself and one newline
#[test]
fn dnl_removes_newline() {
    assert_eq!(expand("a\n!dnl(setup)\nb\n"), "a\nb\n");
    assert_eq!(expand("a\n!deletenewline.. whatever\nb\n"), "a\nb\n");
}
