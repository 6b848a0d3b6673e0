// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only output sinks.
//!
//! A sink may be *position-readable*: it can report how many bytes have been
//! written so far. Block substitutions compare the position before and after
//! running a fragment to learn whether it produced output. A sink that
//! returns `None` from [`Sink::position`] is always treated as if the
//! fragment produced nothing.

use std::io::{self, Write};

/// Destination for processed output.
pub trait Sink {
    /// Append text to the output.
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Bytes written so far, or `None` if the sink cannot tell.
    fn position(&self) -> Option<usize> {
        None
    }
}

impl Sink for String {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.push_str(text);
        Ok(())
    }

    fn position(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        (**self).write_str(text)
    }

    fn position(&self) -> Option<usize> {
        (**self).position()
    }
}

/// Sink over any [`io::Write`], counting the bytes it forwards.
pub struct IoSink<W: Write> {
    inner: W,
    written: usize,
    positioned: bool,
}

impl<W: Write> IoSink<W> {
    /// Position-readable sink.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            written: 0,
            positioned: true,
        }
    }

    /// Sink that never reports its position.
    pub fn unpositioned(inner: W) -> Self {
        Self {
            inner,
            written: 0,
            positioned: false,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink for IoSink<W> {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())?;
        self.written += text.len();
        Ok(())
    }

    fn position(&self) -> Option<usize> {
        self.positioned.then_some(self.written)
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
