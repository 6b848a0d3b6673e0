// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Handlers for matched fragments.
//!
//! Evaluate-or-execute is the only recovering path: a failed evaluation is
//! logged and the fragment is run as statements instead. Anything the failed
//! evaluation already did (including output) is not undone, so a fragment
//! with side effects that fails to evaluate part way can repeat them when it
//! is run.

use crate::env::{Environment, dedent};
use crate::error::PrepError;
use crate::rules::{Handler, MatchContext};
use crate::sink::Sink;
use crate::whitespace::BlockSpacing;

/// Apply `handler` to a matched fragment.
pub fn dispatch(
    handler: Handler,
    ctx: &MatchContext<'_>,
    env: &mut dyn Environment,
    sink: &mut dyn Sink,
) -> Result<(), PrepError> {
    match handler {
        Handler::Evaluate => evaluate(ctx.content, env, sink),
        Handler::EvaluateOrExecute => evaluate_or_execute(ctx.content, env, sink),
        Handler::Execute => execute(ctx.content, env, sink),
        Handler::Comment => {
            sink.write_str(comment_residue(ctx.marker))?;
            Ok(())
        }
        Handler::SuppressNewline => Ok(()),
        Handler::Block => block(ctx, env, sink),
        Handler::UnknownEscape => Err(PrepError::UnknownEscape {
            marker: ctx.marker.to_string(),
        }),
        Handler::UnknownEscapeDelimiter => Err(PrepError::UnknownEscapeDelimiter {
            marker: ctx.marker.to_string(),
            delimiter: ctx.open.to_string(),
        }),
    }
}

fn evaluate(code: &str, env: &mut dyn Environment, sink: &mut dyn Sink) -> Result<(), PrepError> {
    let value = env.evaluate(code, sink).map_err(PrepError::HostEvaluation)?;
    sink.write_str(&value)?;
    Ok(())
}

fn execute(code: &str, env: &mut dyn Environment, sink: &mut dyn Sink) -> Result<(), PrepError> {
    env.run(&dedent(code), sink).map_err(PrepError::HostExecution)
}

fn evaluate_or_execute(
    code: &str,
    env: &mut dyn Environment,
    sink: &mut dyn Sink,
) -> Result<(), PrepError> {
    match env.evaluate(code, sink) {
        Ok(value) => {
            sink.write_str(&value)?;
            Ok(())
        }
        Err(err) => {
            tracing::debug!(error = %err, "evaluation failed, running as statements");
            execute(code, env, sink)
        }
    }
}

fn block(
    ctx: &MatchContext<'_>,
    env: &mut dyn Environment,
    sink: &mut dyn Sink,
) -> Result<(), PrepError> {
    let spacing = BlockSpacing::new(ctx.marker, ctx.close);
    sink.write_str(spacing.lead())?;

    let before = sink.position();
    evaluate_or_execute(ctx.content, env, sink)?;
    let produced = matches!((before, sink.position()), (Some(a), Some(b)) if a != b);

    sink.write_str(spacing.trail(produced))?;
    Ok(())
}

/// The newlines that led up to a comment marker.
fn comment_residue(marker: &str) -> &str {
    match marker.rfind('\n') {
        Some(idx) => &marker[..=idx],
        None => "",
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
