// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prefix patterns for escape markers and delimiters.
//!
//! Every pattern is matched only at the start of the remaining input.
//! Regex patterns are compiled with a `\A` anchor; the end-of-line lookahead
//! used by the comment line form is a dedicated zero-width variant since the
//! `regex` crate has no lookaround.

use regex::Regex;

pub use regex::Error as PatternError;

/// A pattern tried at the start of the remaining input.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Anchored regular expression.
    Regex(Regex),
    /// Zero-width match when the input starts with `\n`.
    BeforeNewline,
}

impl Pattern {
    /// Compile `pattern` anchored at the start of the input.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Regex::new(&format!(r"\A(?:{pattern})")).map(Pattern::Regex)
    }

    /// The text matched at the start of `input`, if any.
    ///
    /// The returned slice borrows from `input` and may be empty for
    /// zero-width matches.
    pub fn match_prefix<'a>(&self, input: &'a str) -> Option<&'a str> {
        match self {
            Pattern::Regex(re) => re.find(input).map(|m| m.as_str()),
            Pattern::BeforeNewline => input.starts_with('\n').then_some(""),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
