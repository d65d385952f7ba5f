// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn lex_error_span() {
    let err = LexError::UnexpectedChar { ch: '!', span: Span::new(3, 4) };
    assert_eq!(err.span(), Span::new(3, 4));
    assert_eq!(err.to_string(), "unexpected character '!' at position 3");
}

#[test]
fn non_ascii_message_shows_hex() {
    let err = LexError::NonAscii { byte: 0xc3, span: Span::new(0, 1) };
    assert_eq!(err.to_string(), "non-ASCII byte 0xc3 at position 0");
}

#[test]
fn decode_error_messages() {
    let err = DecodeError::Noncanonical { digits: "101".into(), offset: 0 };
    assert_eq!(err.to_string(), "noncanonical escape '\\101' at offset 0");
    let err = DecodeError::Truncated { offset: 4 };
    assert_eq!(err.to_string(), "truncated escape at offset 4");
}

#[test]
fn grammar_error_spans() {
    let err = GrammarError::UnexpectedEnd { expected: "value", span: Span::empty(7) };
    assert_eq!(err.span(), Span::empty(7));
    assert_eq!(err.to_string(), "unexpected end of line at position 7, expected value");
    let err = GrammarError::DuplicateField { name: "id".into(), span: Span::new(9, 11) };
    assert_eq!(err.span(), Span::new(9, 11));
}

#[test]
fn class_error_message() {
    let err = ClassError { kind: "async", name: "bogus".into(), span: Span::new(1, 6) };
    assert_eq!(err.to_string(), "unknown async class 'bogus' at position 1");
}
