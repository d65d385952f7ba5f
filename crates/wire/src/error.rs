// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lexing, decoding, and encoding MI text.

use crate::Span;
use thiserror::Error;

/// Errors raised while splitting a line into tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No token kind matches at this position.
    #[error("unexpected character '{ch}' at position {}", span.start)]
    UnexpectedChar {
        /// The unexpected character.
        ch: char,
        /// Source location span for the error.
        span: Span,
    },

    /// A byte outside the ASCII range was received.
    #[error("non-ASCII byte 0x{byte:02x} at position {}", span.start)]
    NonAscii {
        /// The offending byte.
        byte: u8,
        /// Source location span for the error.
        span: Span,
    },

    /// A digit run too large for a correlation token.
    #[error("integer out of range at position {}", span.start)]
    IntegerOverflow {
        /// Source location span for the error.
        span: Span,
    },

    /// A string literal with no closing quote.
    #[error("unterminated string literal at position {}", span.start)]
    UnterminatedString {
        /// Source location span for the error.
        span: Span,
    },
}

impl LexError {
    /// Get the span associated with this error.
    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedChar { span, .. } => *span,
            Self::NonAscii { span, .. } => *span,
            Self::IntegerOverflow { span } => *span,
            Self::UnterminatedString { span } => *span,
        }
    }
}

/// Errors raised while decoding the body of a quoted string.
///
/// Offsets are relative to the first character after the opening quote.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Backslash followed by a character that is neither a named escape nor
    /// an octal digit.
    #[error("invalid escape '\\{ch}' at offset {offset}")]
    InvalidEscape { ch: char, offset: usize },

    /// Octal escape whose value exceeds one byte.
    #[error("octal escape '\\{digits}' out of range at offset {offset}")]
    OctalOutOfRange { digits: String, offset: usize },

    /// Octal escape for a byte the debugger would have written some other way.
    #[error("noncanonical escape '\\{digits}' at offset {offset}")]
    Noncanonical { digits: String, offset: usize },

    /// Character outside 32..=126, or a bare quote or backslash.
    #[error("character 0x{byte:02x} must be escaped at offset {offset}")]
    Unescaped { byte: u8, offset: usize },

    /// Input ended in the middle of an escape.
    #[error("truncated escape at offset {offset}")]
    Truncated { offset: usize },
}

/// Errors raised when a token stream does not form a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("unexpected {found} at position {}, expected {expected}", span.start)]
    UnexpectedToken { found: String, expected: &'static str, span: Span },

    #[error("unexpected end of line at position {}, expected {expected}", span.start)]
    UnexpectedEnd { expected: &'static str, span: Span },

    #[error("duplicate field '{name}' at position {}", span.start)]
    DuplicateField { name: String, span: Span },

    /// Stream records never carry a correlation token.
    #[error("stream record cannot carry a token at position {}", span.start)]
    TokenOnStream { span: Span },
}

impl GrammarError {
    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { span, .. } => *span,
            Self::UnexpectedEnd { span, .. } => *span,
            Self::DuplicateField { span, .. } => *span,
            Self::TokenOnStream { span } => *span,
        }
    }
}

/// Class word outside the closed set registered for its record kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} class '{name}' at position {}", span.start)]
pub struct ClassError {
    /// `"result"` or `"async"`.
    pub kind: &'static str,
    pub name: String,
    pub span: Span,
}

/// Outbound text that cannot be written to the debugger.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("{what} contains non-ASCII character {ch:?}")]
    NonAscii { what: &'static str, ch: char },

    #[error("{what} contains a line break")]
    LineBreak { what: &'static str },

    #[error("{what} is empty")]
    EmptyName { what: &'static str },

    #[error("{what} contains {ch:?}; only letters, digits, '-' and '_' are allowed")]
    InvalidNameChar { what: &'static str, ch: char },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
