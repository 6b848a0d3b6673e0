// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The scanning driver.
//!
//! Walks the input left to right. At each position the escape rules are
//! tried in order; the first match is dispatched and the cursor jumps past
//! it, otherwise one character is copied through unchanged.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::dispatch::dispatch;
use crate::env::Environment;
use crate::error::PrepError;
use crate::rules::{EscapeTable, MatchContext};
use crate::sink::Sink;

/// A preprocessor instance: rule table, execution environment, and sink.
///
/// The environment and sink live as long as the instance, so several
/// documents processed in turn share definitions and append to one output.
pub struct Prep<E, S> {
    table: EscapeTable,
    env: E,
    sink: S,
    debug: bool,
}

impl<E: Environment, S: Sink> Prep<E, S> {
    /// Preprocessor with the standard escape rules.
    pub fn new(env: E, sink: S) -> Self {
        Self::with_table(EscapeTable::standard(), env, sink)
    }

    pub fn with_table(table: EscapeTable, env: E, sink: S) -> Self {
        Self {
            table,
            env,
            sink,
            debug: false,
        }
    }

    /// In debug mode matches are annotated in the output instead of being
    /// dispatched, and no fragment is evaluated or run.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (E, S) {
        (self.env, self.sink)
    }

    /// Read a file fully and process its contents.
    ///
    /// Line endings are normalized with [`universal_newlines`] first.
    pub fn process_file(&mut self, path: &Path) -> Result<(), PrepError> {
        let input = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "processing file");
        self.process(&universal_newlines(&input))
    }

    /// Process one buffer, appending the result to the sink.
    ///
    /// Stops at the first error; output written before it is kept.
    pub fn process(&mut self, input: &str) -> Result<(), PrepError> {
        let span = tracing::debug_span!("process", bytes = input.len());
        let _guard = span.enter();

        let mut rest = input;
        while let Some(ch) = rest.chars().next() {
            let Some((rule, ctx)) = self.table.match_at(rest)? else {
                let (literal, tail) = rest.split_at(ch.len_utf8());
                self.sink.write_str(literal)?;
                rest = tail;
                continue;
            };

            let offset = input.len() - rest.len();
            tracing::debug!(rule = rule.name, offset, len = ctx.len, "escape");

            if self.debug {
                annotate(&ctx, &mut self.sink)?;
            } else {
                dispatch(rule.handler, &ctx, &mut self.env, &mut self.sink)?;
            }
            rest = &rest[ctx.len..];
        }
        Ok(())
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
///
/// The escape patterns only recognize `\n`, so templates read from files
/// or stdin go through this before scanning. [`Prep::process`] itself
/// leaves its input untouched.
pub fn universal_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Debug-mode rendering of a match.
fn annotate(ctx: &MatchContext<'_>, sink: &mut dyn Sink) -> Result<(), PrepError> {
    sink.write_str(&format!(
        "<escape={}><delimiter={}><esc={}><delimiter={}>",
        ctx.marker, ctx.open, ctx.content, ctx.close
    ))?;
    Ok(())
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
