// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::macros::string;
use crate::lexer::Lexer;
use crate::token::{Prefix, TokenKind};

lex_tests! {
    empty_string: "~\"\"" => [TokenKind::Prefix(Prefix::Console), string(b"")],
    escaped_quote_inside: "~\"a\\\"b\"" => [TokenKind::Prefix(Prefix::Console), string(b"a\"b")],
    escaped_backslash_before_close: "~\"a\\\\\"" => [TokenKind::Prefix(Prefix::Console), string(b"a\\")],
    octal_high_byte: "@\"\\377\"" => [TokenKind::Prefix(Prefix::Target), string(b"\xff")],
    punctuation_inside: "~\"{[,=]}\"" => [TokenKind::Prefix(Prefix::Console), string(b"{[,=]}")],
    two_strings: "\"a\",\"b\"" => [string(b"a"), TokenKind::Comma, string(b"b")],
}
