// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! GDB/MI wire protocol: line parsing, the record model, and command
//! encoding.
//!
//! Inbound: one line of debugger output becomes one [`Record`] via
//! [`Parser::parse`]. Outbound: a [`Command`] is validated and rendered
//! with a correlation token drawn from a [`TokenCounter`].

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod macros;

pub mod class;
pub mod encoder;
pub mod error;
pub mod lexer;
pub mod parse_error;
pub mod parser;
pub mod record;
mod span;
pub mod token;

pub use class::{AsyncClass, ResultClass};
pub use encoder::{Arg, Command, Encoded, FlagValue, TokenCounter};
pub use error::{ClassError, DecodeError, EncodingError, GrammarError, LexError};
pub use parse_error::ParseError;
pub use parser::Parser;
pub use record::{AsyncKind, Mapping, Record, StreamKind, Value, PROMPT};
pub use span::{context_snippet, Span};
