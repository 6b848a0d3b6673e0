// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for runtime settings.

/// Environment variable names read at startup.
pub mod vars {
    /// Enables the diagnostic (annotate-only) mode when truthy.
    pub const DEBUG: &str = "PREP_DEBUG";

    /// `tracing-subscriber` filter directive for stderr logging.
    pub const LOG: &str = "PREP_LOG";
}

/// Default log filter when `PREP_LOG` is unset or invalid.
pub const LOG_FILTER: &str = "warn";

/// Values accepted as "on" for boolean variables (case-insensitive).
pub const TRUTHY: &[&str] = &["1", "true", "yes", "on"];
