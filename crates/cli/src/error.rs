// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.
//!
//! Every error raised while scanning is fatal: the run stops at the first
//! one and output already written stays written.

use std::io;

use thiserror::Error;

use crate::env::HostError;

/// Fatal errors raised while processing a document.
#[derive(Debug, Error)]
pub enum PrepError {
    /// Input ran out before the fragment's closing delimiter was found.
    #[error("Escape reached EOF")]
    UnterminatedEscape,

    /// An escape-shaped marker that no rule claimed.
    #[error("Unknown escape: {marker}")]
    UnknownEscape { marker: String },

    /// An unclaimed marker followed by the `..` line delimiter.
    #[error("Unknown escape+delimiter: {marker}{delimiter}")]
    UnknownEscapeDelimiter { marker: String, delimiter: String },

    /// Strict evaluation (`!print`) failed.
    #[error("evaluation failed: {0}")]
    HostEvaluation(#[source] HostError),

    /// Statement execution failed, either directly (`!exec`) or as the
    /// fallback after a failed evaluation.
    #[error("execution failed: {0}")]
    HostExecution(#[source] HostError),

    /// Reading input or writing to the sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Exit codes returned by the `prep` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Input processed, or help requested.
    Success = 0,
    /// Bad invocation.
    Usage = 1,
    /// A fatal processing error.
    Failed = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
