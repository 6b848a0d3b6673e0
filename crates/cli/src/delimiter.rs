// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Balanced delimiter matching.
//!
//! A fragment starts at its opening delimiter and ends at the closing match
//! that brings the nesting depth back to zero. Inner opening and closing
//! matches stay in the content; only the final closing match is stripped.

use crate::error::PrepError;
use crate::pattern::Pattern;

/// Opening and closing patterns for one delimiter form.
#[derive(Debug, Clone)]
pub struct DelimiterRule {
    pub open: Pattern,
    pub close: Pattern,
    /// Whether inner opening matches raise the depth.
    pub nests: bool,
}

/// A delimited region found right after an escape marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimited<'a> {
    /// Literal opening delimiter text.
    pub open: &'a str,
    /// Everything between the opening and the final closing match.
    pub content: &'a str,
    /// Literal closing delimiter text (may be empty for lookahead closes).
    pub close: &'a str,
    /// Bytes consumed from the input, delimiters included.
    pub len: usize,
}

impl DelimiterRule {
    pub fn new(open: Pattern, close: Pattern, nests: bool) -> Self {
        Self { open, close, nests }
    }

    /// Scan for the balanced close, starting after the opening match.
    fn scan<'a>(&self, input: &'a str, open: &'a str) -> Result<Delimited<'a>, PrepError> {
        let start = open.len();
        let mut pos = start;
        let mut depth = 1usize;

        loop {
            let rest = &input[pos..];
            let Some(ch) = rest.chars().next() else {
                return Err(PrepError::UnterminatedEscape);
            };

            if self.nests
                && let Some(inner) = self.open.match_prefix(rest)
                && !inner.is_empty()
            {
                depth += 1;
                pos += inner.len();
                continue;
            }

            if let Some(close) = self.close.match_prefix(rest) {
                depth -= 1;
                if depth == 0 {
                    return Ok(Delimited {
                        open,
                        content: &input[start..pos],
                        close,
                        len: pos + close.len(),
                    });
                }
                if !close.is_empty() {
                    pos += close.len();
                    continue;
                }
            }

            pos += ch.len_utf8();
        }
    }
}

/// Try each delimiter rule in order against `input`.
///
/// The first rule whose opening pattern matches decides the outcome: its
/// region is returned, or `UnterminatedEscape` if the input ends first.
/// Later rules are not consulted once an opening has matched.
pub fn match_delimited<'a>(
    input: &'a str,
    rules: &[DelimiterRule],
) -> Result<Option<Delimited<'a>>, PrepError> {
    for rule in rules {
        if let Some(open) = rule.open.match_prefix(input) {
            return rule.scan(input, open).map(Some);
        }
    }
    Ok(None)
}

#[cfg(test)]
#[path = "delimiter_tests.rs"]
mod tests;
