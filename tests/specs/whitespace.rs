//! Behavioral specs for inline and block whitespace handling.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use similar_asserts::assert_eq;

use crate::prelude::*;

/// Inline escapes eat the whitespace on both sides
#[test]
fn inline_joins_neighbours() {
    assert_eq!(expand("name_  \n  !i(\"x\")  \n  _suffix"), "name_x_suffix");
}

/// A block with output keeps at most one blank line on each side
#[test]
fn block_with_output() {
    assert_eq!(expand("top\n\n\n\n!b(40 + 2)\n\n\n\nbottom"), "top\n\n42\n\nbottom");
    assert_eq!(expand("top\n!b(1)\nbottom"), "top\n1\nbottom");
}

/// A statement-only block collapses the surrounding gap
#[test]
fn statement_block_collapses_gap() {
    assert_eq!(expand("top\n!b(let y = 2)\n\nbottom"), "top\n\nbottom");
    assert_eq!(expand("top\n!b(let y = 2)\nbottom"), "top\nbottom");
}

/// Block bodies printing lines read naturally
#[test]
fn block_printing_lines() {
    let input = "items:\n!b(((\n    for i in 1..=2 {\n        print(`- ${i}`);\n    }\n)))\nend\n";
    assert_eq!(expand(input), "items:\n- 1\n- 2\n\nend\n");
}
