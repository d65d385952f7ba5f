// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the session crate.

/// Debugger program used when nothing else is configured.
pub const DEFAULT_PROGRAM: &str = "gdb";

/// MI interpreter version requested on the command line.
pub const DEFAULT_INTERPRETER: &str = "mi2";

/// Debugger program override (`GDBMI_GDB`)
pub fn gdb_program() -> Option<String> {
    std::env::var("GDBMI_GDB").ok().filter(|s| !s.is_empty())
}

/// Interpreter name override (`GDBMI_INTERPRETER`)
pub fn interpreter() -> Option<String> {
    std::env::var("GDBMI_INTERPRETER").ok().filter(|s| !s.is_empty())
}
