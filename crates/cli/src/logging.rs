// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stderr logging.
//!
//! Diagnostics go through `tracing`; the binary installs a plain stderr
//! subscriber filtered by `PREP_LOG`. Output documents only ever go to
//! stdout.

use tracing_subscriber::EnvFilter;

use crate::config::{Settings, defaults};

/// Filter for `settings`, falling back to the default on a bad directive.
pub fn filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|err| {
        eprintln!("warning: ignoring invalid log filter {:?}: {err}", settings.log_filter);
        EnvFilter::new(defaults::LOG_FILTER)
    })
}

/// Install the global subscriber. Does nothing if one is already set.
pub fn init(settings: &Settings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(settings))
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
