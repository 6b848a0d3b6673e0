// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The ordered escape rule table.
//!
//! Rules are tried in registration order. A rule claims a position only when
//! its marker matches *and* one of its delimiter forms opens right after the
//! marker, so a generic marker like `!` falls through to later rules when
//! its delimiters don't fit.

use std::sync::LazyLock;

use crate::delimiter::{DelimiterRule, match_delimited};
use crate::error::PrepError;
use crate::pattern::{Pattern, PatternError};

const TRIPLE_OPEN: &str = r"\(\(\(\n?";
const TRIPLE_CLOSE: &str = r"\n?\)\)\)";
const PAREN_OPEN: &str = r"\(";
const PAREN_CLOSE: &str = r"\)";
const LINE_OPEN: &str = r"\.\.";

/// What to do with a matched fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Evaluate and write the value; failure is fatal.
    Evaluate,
    /// Evaluate and write the value, falling back to running statements.
    EvaluateOrExecute,
    /// Run statements; nothing is written by the handler itself.
    Execute,
    /// Discard the fragment, keeping only newlines that led up to it.
    Comment,
    /// Discard the fragment and one following newline.
    SuppressNewline,
    /// `EvaluateOrExecute` with block whitespace normalization.
    Block,
    /// Fail naming the marker.
    UnknownEscape,
    /// Fail naming the marker and opening delimiter.
    UnknownEscapeDelimiter,
}

/// A marker pattern, its delimiter forms, and its handler.
#[derive(Debug, Clone)]
pub struct EscapeRule {
    pub name: &'static str,
    pub marker: Pattern,
    pub delimiters: Vec<DelimiterRule>,
    pub handler: Handler,
}

/// The literal pieces of one successful match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchContext<'a> {
    pub marker: &'a str,
    pub open: &'a str,
    pub content: &'a str,
    pub close: &'a str,
    /// Bytes consumed from the input.
    pub len: usize,
}

/// Ordered list of escape rules.
#[derive(Debug, Clone)]
pub struct EscapeTable {
    rules: Vec<EscapeRule>,
}

#[allow(clippy::expect_used)]
static STANDARD: LazyLock<EscapeTable> =
    LazyLock::new(|| build_standard().expect("valid escape patterns"));

impl EscapeTable {
    pub fn new(rules: Vec<EscapeRule>) -> Self {
        Self { rules }
    }

    /// The built-in rule table.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    pub fn rules(&self) -> &[EscapeRule] {
        &self.rules
    }

    /// Find the first rule that claims the start of `input`.
    pub fn match_at<'a>(
        &self,
        input: &'a str,
    ) -> Result<Option<(&EscapeRule, MatchContext<'a>)>, PrepError> {
        for rule in &self.rules {
            let Some(marker) = rule.marker.match_prefix(input) else {
                continue;
            };
            if let Some(found) = match_delimited(&input[marker.len()..], &rule.delimiters)? {
                let ctx = MatchContext {
                    marker,
                    open: found.open,
                    content: found.content,
                    close: found.close,
                    len: marker.len() + found.len,
                };
                return Ok(Some((rule, ctx)));
            }
        }
        Ok(None)
    }
}

/// Triple-paren and single-paren forms, with `close_suffix` appended to
/// each closing pattern.
fn default_forms(close_suffix: &str) -> Result<Vec<DelimiterRule>, PatternError> {
    Ok(vec![
        DelimiterRule::new(
            Pattern::new(TRIPLE_OPEN)?,
            Pattern::new(&format!("{TRIPLE_CLOSE}{close_suffix}"))?,
            true,
        ),
        DelimiterRule::new(
            Pattern::new(PAREN_OPEN)?,
            Pattern::new(&format!("{PAREN_CLOSE}{close_suffix}"))?,
            true,
        ),
    ])
}

fn rule(
    name: &'static str,
    marker: &str,
    delimiters: Vec<DelimiterRule>,
    handler: Handler,
) -> Result<EscapeRule, PatternError> {
    Ok(EscapeRule {
        name,
        marker: Pattern::new(marker)?,
        delimiters,
        handler,
    })
}

fn build_standard() -> Result<EscapeTable, PatternError> {
    let mut comment = default_forms("")?;
    comment.push(DelimiterRule::new(
        Pattern::new(LINE_OPEN)?,
        Pattern::BeforeNewline,
        false,
    ));

    let mut dnl = default_forms(r"\n?")?;
    dnl.push(DelimiterRule::new(
        Pattern::new(LINE_OPEN)?,
        Pattern::new(r"\n")?,
        false,
    ));

    let mut unknown_line = default_forms("")?;
    unknown_line.push(DelimiterRule::new(
        Pattern::new(&format!(r"{LINE_OPEN}\s*"))?,
        Pattern::new(r"\n")?,
        false,
    ));

    Ok(EscapeTable::new(vec![
        rule("generic", "!", default_forms("")?, Handler::EvaluateOrExecute)?,
        rule("print", "!p(?:rint)?", default_forms("")?, Handler::Evaluate)?,
        rule("exec", "!e(?:xec)?", default_forms("")?, Handler::Execute)?,
        rule("comment", r"\s*!c(?:omment)?", comment, Handler::Comment)?,
        rule("dnl", "!(?:dnl|deletenewline)", dnl, Handler::SuppressNewline)?,
        rule("inline", r"\s*!i(?:nline)?", default_forms(r"\s*")?, Handler::EvaluateOrExecute)?,
        rule("block", r"\s*!b(?:lock)?", default_forms(r"\s*")?, Handler::Block)?,
        rule("unknown", r"!\w*", default_forms("")?, Handler::UnknownEscape)?,
        rule("unknown-delimiter", r"!\w*", unknown_line, Handler::UnknownEscapeDelimiter)?,
    ]))
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
