// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! How the debugger process is launched.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::env;

/// Debugger launch configuration.
///
/// Layered as defaults, then environment, then explicit builder calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub program: PathBuf,
    pub interpreter: String,
    /// Passed after `--interpreter=`, e.g. `-q` or `-nx`.
    pub extra_args: Vec<OsString>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(env::DEFAULT_PROGRAM),
            interpreter: env::DEFAULT_INTERPRETER.to_string(),
            extra_args: Vec::new(),
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by `GDBMI_GDB` and `GDBMI_INTERPRETER`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(program) = env::gdb_program() {
            config.program = PathBuf::from(program);
        }
        if let Some(interpreter) = env::interpreter() {
            config.interpreter = interpreter;
        }
        config
    }

    #[must_use]
    pub fn program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    #[must_use]
    pub fn interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    /// Arguments after the program name.
    pub fn args(&self) -> Vec<OsString> {
        let mut args = vec![OsString::from(format!("--interpreter={}", self.interpreter))];
        args.extend(self.extra_args.iter().cloned());
        args
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
