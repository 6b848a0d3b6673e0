// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whitespace normalization around block substitutions.
//!
//! A block marker swallows the whitespace before it and its closing
//! delimiter swallows the whitespace after it. Instead of reproducing both
//! runs, the output gets at most a blank line on each side, and a block that
//! printed nothing leaves a single gap rather than two.

/// Whitespace counts taken from a block's marker and closing delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpacing<'a> {
    lead: &'a str,
    trail: &'a str,
    lead_newlines: usize,
    trail_newlines: usize,
}

impl<'a> BlockSpacing<'a> {
    pub fn new(marker: &'a str, close: &'a str) -> Self {
        let lead = leading_whitespace(marker);
        let trail = trailing_whitespace(close);
        Self {
            lead,
            trail,
            lead_newlines: count_newlines(lead),
            trail_newlines: count_newlines(trail),
        }
    }

    /// Padding written before the fragment runs.
    pub fn lead(&self) -> &'static str {
        padding(self.lead_newlines, !self.lead.is_empty())
    }

    /// Padding written after the fragment, given whether it produced output.
    pub fn trail(&self, produced_output: bool) -> &'static str {
        if produced_output {
            return padding(self.trail_newlines, !self.trail.is_empty());
        }
        match (self.lead_newlines, self.trail_newlines) {
            (0, 0) if self.lead.is_empty() && !self.trail.is_empty() => " ",
            (0, 0) => "",
            (0, 1) => "\n",
            (0, _) => "\n\n",
            (1, n) if n > 1 => "\n",
            _ => "",
        }
    }
}

/// Whitespace before the marker word: trailing whitespace is trimmed, then
/// the trailing non-whitespace run is dropped.
fn leading_whitespace(marker: &str) -> &str {
    marker
        .trim_end()
        .trim_end_matches(|c: char| !c.is_whitespace())
}

/// Whitespace after the delimiter symbol: leading whitespace is trimmed,
/// then the leading non-whitespace run is dropped.
fn trailing_whitespace(close: &str) -> &str {
    close
        .trim_start()
        .trim_start_matches(|c: char| !c.is_whitespace())
}

fn count_newlines(text: &str) -> usize {
    text.matches('\n').count()
}

fn padding(newlines: usize, has_whitespace: bool) -> &'static str {
    match newlines {
        0 if has_whitespace => " ",
        0 => "",
        1 => "\n",
        _ => "\n\n",
    }
}

#[cfg(test)]
#[path = "whitespace_tests.rs"]
mod tests;
