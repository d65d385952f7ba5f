// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log output for the CLI. Always stderr, so stdout stays pure JSON.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Filter directive used when `GDBMI_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// `GDBMI_LOG`, e.g. `debug` or `gdbmi_session=trace`.
fn filter() -> EnvFilter {
    EnvFilter::try_from_env("GDBMI_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(true)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}
