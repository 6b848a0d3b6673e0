// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A text preprocessor for templates with embedded script fragments.
//!
//! The scanner copies text through unchanged until it meets an escape such
//! as `!(1 + 1)` or `!exec(let x = 5)`, extracts the balanced fragment, and
//! hands it to the matching handler: print a value, run statements, drop a
//! comment, and so on. Fragments run in one persistent [`Environment`]; the
//! binary uses [`RhaiEnvironment`].

pub mod cli;
pub mod config;
pub mod delimiter;
mod dispatch;
pub mod engine;
pub mod env;
pub mod error;
pub mod logging;
pub mod pattern;
pub mod rules;
pub mod sink;
mod whitespace;


pub use engine::Prep;
pub use env::{Environment, HostError, RhaiEnvironment};
pub use error::PrepError;
pub use rules::{EscapeTable, Handler};
pub use sink::{IoSink, Sink};
