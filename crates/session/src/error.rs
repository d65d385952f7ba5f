// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session error types.

use std::path::PathBuf;

use gdbmi_wire::{EncodingError, ParseError};
use thiserror::Error;

/// Misuse of the session API. Always a caller bug.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContractError {
    #[error("a reply wait is already in progress")]
    WaitInProgress,

    #[error("the debugger output stream has ended")]
    StreamEnded,

    #[error("the debugger input stream is closed")]
    InputClosed,
}

/// Errors that can occur while driving a debugger session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to start {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Debugger {0} is not piped")]
    MissingPipe(&'static str),

    #[error("Malformed record {line:?}: {source}")]
    Parse {
        line: String,
        #[source]
        source: ParseError,
    },

    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Contract violation: {0}")]
    Contract(#[from] ContractError),

    #[error("Signal delivery failed: {0}")]
    Signal(#[from] nix::errno::Errno),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Wrap a parse failure with the line that caused it.
    pub fn parse(line: &[u8], source: ParseError) -> Self {
        SessionError::Parse { line: String::from_utf8_lossy(line).into_owned(), source }
    }

    /// Caret diagnostic for a parse failure.
    pub fn context(&self, max_width: usize) -> Option<String> {
        match self {
            SessionError::Parse { line, source } => Some(source.context(line, max_width)),
            _ => None,
        }
    }
}
