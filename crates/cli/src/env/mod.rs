// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Execution environments for embedded fragments.
//!
//! The engine only needs two operations from the host language: evaluate an
//! expression to a printable value, and run statements. Both act on one
//! persistent state that lives as long as the environment, so later
//! fragments (and later documents) see earlier definitions.

pub mod rhai;

use std::io;

use thiserror::Error;

use crate::sink::Sink;

pub use self::rhai::RhaiEnvironment;

/// Failure reported by an execution environment.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host rejected or failed to run the code.
    #[error("{0}")]
    Script(String),
    /// Output written by the code could not be delivered.
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

/// The host-language capability the dispatcher calls into.
///
/// Output the code writes itself (for example through a `print` function)
/// goes to `out`, ahead of any value the engine writes afterwards.
pub trait Environment {
    /// Evaluate `code` as an expression and return its textual value.
    fn evaluate(&mut self, code: &str, out: &mut dyn Sink) -> Result<String, HostError>;

    /// Run `code` as statements.
    fn run(&mut self, code: &str, out: &mut dyn Sink) -> Result<(), HostError>;
}

impl<E: Environment + ?Sized> Environment for &mut E {
    fn evaluate(&mut self, code: &str, out: &mut dyn Sink) -> Result<String, HostError> {
        (**self).evaluate(code, out)
    }

    fn run(&mut self, code: &str, out: &mut dyn Sink) -> Result<(), HostError> {
        (**self).run(code, out)
    }
}

/// Remove the whitespace prefix shared by every non-blank line.
///
/// Only spaces and tabs count as indentation. Lines holding nothing but
/// spaces and tabs are ignored when computing the prefix and come out empty.
pub fn dedent(code: &str) -> String {
    let margin = code
        .split('\n')
        .filter(|line| !is_blank(line))
        .map(indentation)
        .reduce(common_prefix)
        .unwrap_or("");

    code.split('\n')
        .map(|line| if is_blank(line) { "" } else { &line[margin.len()..] })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_blank(line: &str) -> bool {
    line.trim_start_matches([' ', '\t']).is_empty()
}

fn indentation(line: &str) -> &str {
    let rest = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - rest.len()]
}

fn common_prefix<'a>(a: &'a str, b: &'a str) -> &'a str {
    let shared = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..shared]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
