// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime settings.
//!
//! There is no config file; the rule table is fixed. The binary reads a
//! couple of environment variables once at startup (see [`defaults::vars`]).

pub mod defaults;

/// Settings for one run of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Annotate matches instead of dispatching them.
    pub debug: bool,
    /// Log filter directive.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            log_filter: defaults::LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(value) = lookup(defaults::vars::DEBUG) {
            settings.debug = is_truthy(&value);
        }
        if let Some(filter) = lookup(defaults::vars::LOG)
            && !filter.trim().is_empty()
        {
            settings.log_filter = filter.trim().to_string();
        }
        settings
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    defaults::TRUTHY
        .iter()
        .any(|truthy| truthy.eq_ignore_ascii_case(value))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
