// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token types for the MI line lexer.

use std::fmt;

pub use crate::span::{context_snippet, Span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of decimal digits, e.g. the correlation token in `12^done`.
    Integer(u64),
    /// One of `^ * = + ~ @ &`, only at line start or right after an integer.
    Prefix(Prefix),
    /// Letters, digits and dashes, with dashes already turned into underscores.
    Word(String),
    /// A quoted C string, already decoded.
    Str(Vec<u8>),
    /// `{}`
    TupleEmpty,
    /// `{`
    TupleBegin,
    /// `}`
    TupleEnd,
    /// `[]`
    ListEmpty,
    /// `[`
    ListBegin,
    /// `]`
    ListEnd,
    Comma,
    Equals,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Integer(n) => write!(f, "integer {}", n),
            TokenKind::Prefix(p) => write!(f, "prefix '{}'", p.as_char()),
            TokenKind::Word(w) => write!(f, "word '{}'", w),
            TokenKind::Str(_) => write!(f, "string"),
            TokenKind::TupleEmpty => write!(f, "'{{}}'"),
            TokenKind::TupleBegin => write!(f, "'{{'"),
            TokenKind::TupleEnd => write!(f, "'}}'"),
            TokenKind::ListEmpty => write!(f, "'[]'"),
            TokenKind::ListBegin => write!(f, "'['"),
            TokenKind::ListEnd => write!(f, "']'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Equals => write!(f, "'='"),
        }
    }
}

/// Record-kind marker that follows the optional token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// `^` result record
    Result,
    /// `*` exec async record
    Exec,
    /// `+` status async record
    Status,
    /// `=` notify async record
    Notify,
    /// `~` console stream record
    Console,
    /// `@` target stream record
    Target,
    /// `&` log stream record
    Log,
}

impl Prefix {
    pub fn from_char(ch: char) -> Option<Self> {
        Some(match ch {
            '^' => Prefix::Result,
            '*' => Prefix::Exec,
            '+' => Prefix::Status,
            '=' => Prefix::Notify,
            '~' => Prefix::Console,
            '@' => Prefix::Target,
            '&' => Prefix::Log,
            _ => return None,
        })
    }

    pub fn as_char(self) -> char {
        match self {
            Prefix::Result => '^',
            Prefix::Exec => '*',
            Prefix::Status => '+',
            Prefix::Notify => '=',
            Prefix::Console => '~',
            Prefix::Target => '@',
            Prefix::Log => '&',
        }
    }
}

/// Characters allowed in a word: `[-A-Za-z0-9]`.
pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-'
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
