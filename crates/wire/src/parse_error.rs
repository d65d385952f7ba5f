// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-level parse failure covering every stage of record parsing.

use super::error::{ClassError, DecodeError, GrammarError, LexError};
use super::token::{context_snippet, Span};
use thiserror::Error;

/// Why one line of debugger output could not become a [`Record`](crate::Record).
///
/// Each error is fatal to its line only. Use [`ParseError::context`] to
/// render a snippet with a caret under the offending text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("lexer error: {0}")]
    Lex(#[from] LexError),

    /// A string literal lexed fine but its escapes are invalid.
    #[error("bad string literal at position {}: {source}", span.start)]
    Decode {
        #[source]
        source: DecodeError,
        /// Span of the whole literal, quotes included.
        span: Span,
    },

    #[error("grammar error: {0}")]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Class(#[from] ClassError),
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(e) => e.span(),
            ParseError::Decode { span, .. } => *span,
            ParseError::Grammar(e) => e.span(),
            ParseError::Class(e) => e.span,
        }
    }

    /// Snippet of `line` with carets under the error.
    pub fn context(&self, line: &str, max_width: usize) -> String {
        context_snippet(line, self.span(), max_width)
    }
}
