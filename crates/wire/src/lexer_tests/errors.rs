// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer failures: every character must belong to a token.

use crate::error::{DecodeError, LexError};
use crate::lexer::Lexer;
use crate::parse_error::ParseError;
use crate::token::Span;

lex_error_tests! {
    space_is_not_a_token: "^done, value=\"1\"" => ParseError::Lex(LexError::UnexpectedChar { ch: ' ', .. }),
    stray_bang: "^done!" => ParseError::Lex(LexError::UnexpectedChar { ch: '!', .. }),
    underscore_is_not_word_char: "^done,a_b=\"1\"" => ParseError::Lex(LexError::UnexpectedChar { ch: '_', .. }),
    prefix_in_middle: "^done,^" => ParseError::Lex(LexError::UnexpectedChar { ch: '^', .. }),
    tilde_after_word: "abc~\"x\"" => ParseError::Lex(LexError::UnexpectedChar { ch: '~', .. }),
    tab_outside_string: "^done\t" => ParseError::Lex(LexError::UnexpectedChar { ch: '\t', .. }),
    non_ascii_outside_string: "^dóne" => ParseError::Lex(LexError::NonAscii { byte: 0xc3, .. }),
    unterminated_string: "~\"abc" => ParseError::Lex(LexError::UnterminatedString { .. }),
    escaped_closing_quote: "~\"abc\\\"" => ParseError::Lex(LexError::UnterminatedString { .. }),
    integer_overflow: "18446744073709551616^done" => ParseError::Lex(LexError::IntegerOverflow { .. }),
    noncanonical_octal: "~\"\\101\"" => ParseError::Decode { source: DecodeError::Noncanonical { .. }, .. },
    truncated_octal: "~\"\\1\"" => ParseError::Decode { source: DecodeError::Truncated { .. }, .. },
    non_ascii_inside_string: "~\"é\"" => ParseError::Decode { source: DecodeError::Unescaped { .. }, .. },
}

#[test]
fn unexpected_char_span_points_at_char() {
    let err = Lexer::tokenize("^done,?").unwrap_err();
    assert_eq!(err.span(), Span::new(6, 7));
}

#[test]
fn decode_error_span_covers_literal() {
    let err = Lexer::tokenize("^done,a=\"\\101\"").unwrap_err();
    assert_eq!(err.span(), Span::new(8, 14));
}

#[test]
fn unterminated_string_span_runs_to_end() {
    let err = Lexer::tokenize("~\"abc").unwrap_err();
    assert_eq!(err.span(), Span::new(1, 5));
}
