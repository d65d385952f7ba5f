// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lines that must be rejected, and where the errors point.

use crate::error::{ClassError, DecodeError, GrammarError, LexError};
use crate::parse_error::ParseError;
use crate::parser::Parser;
use crate::token::Span;

parse_error_tests! {
    empty_line: "" => ParseError::Grammar(GrammarError::UnexpectedEnd { .. }),
    token_without_prefix: "12" => ParseError::Grammar(GrammarError::UnexpectedEnd { .. }),
    word_without_prefix: "done" => ParseError::Grammar(GrammarError::UnexpectedToken { .. }),
    missing_class: "^" => ParseError::Grammar(GrammarError::UnexpectedEnd { .. }),
    string_as_class: "^\"done\"" => ParseError::Grammar(GrammarError::UnexpectedToken { .. }),
    unknown_result_class: "^finished" => ParseError::Class(ClassError { kind: "result", .. }),
    unknown_async_class: "=thread-spawned" => ParseError::Class(ClassError { kind: "async", .. }),
    result_class_on_async: "*done" => ParseError::Class(ClassError { .. }),
    async_class_on_result: "^stopped" => ParseError::Class(ClassError { .. }),
    stream_without_payload: "~" => ParseError::Grammar(GrammarError::UnexpectedEnd { .. }),
    stream_with_word: "~abc" => ParseError::Grammar(GrammarError::UnexpectedToken { .. }),
    stream_with_token: "3~\"x\"" => ParseError::Grammar(GrammarError::TokenOnStream { .. }),
    stream_trailing: "~\"x\",a=\"1\"" => ParseError::Grammar(GrammarError::UnexpectedToken { .. }),
    duplicate_top_level: "^done,a=\"1\",a=\"2\"" => ParseError::Grammar(GrammarError::DuplicateField { .. }),
    duplicate_in_tuple: "^done,t={a=\"1\",a=\"2\"}" => ParseError::Grammar(GrammarError::DuplicateField { .. }),
    missing_equals: "^done,a\"1\"" => ParseError::Grammar(GrammarError::UnexpectedToken { .. }),
    missing_value: "^done,a=" => ParseError::Grammar(GrammarError::UnexpectedEnd { .. }),
    bare_word_value: "^done,a=b" => ParseError::Grammar(GrammarError::UnexpectedToken { .. }),
    dangling_comma: "^done," => ParseError::Grammar(GrammarError::UnexpectedEnd { .. }),
    unclosed_tuple: "^done,a={b=\"1\"" => ParseError::Grammar(GrammarError::UnexpectedEnd { .. }),
    unclosed_list: "^done,a=[\"1\"" => ParseError::Grammar(GrammarError::UnexpectedEnd { .. }),
    mismatched_close: "^done,a=[\"1\"}" => ParseError::Grammar(GrammarError::UnexpectedToken { .. }),
    trailing_comma_in_list: "^done,a=[\"1\",]" => ParseError::Grammar(GrammarError::UnexpectedToken { .. }),
    bare_value_in_tuple: "^done,a={\"1\"}" => ParseError::Grammar(GrammarError::UnexpectedToken { .. }),
    trailing_tokens: "^done\"x\"" => ParseError::Grammar(GrammarError::UnexpectedToken { .. }),
    two_records: "^done^done" => ParseError::Lex(LexError::UnexpectedChar { ch: '^', .. }),
    noncanonical_octal: "~\"\\101\"" => ParseError::Decode { source: DecodeError::Noncanonical { .. }, .. },
    bad_named_escape: "~\"\\q\"" => ParseError::Decode { source: DecodeError::InvalidEscape { ch: 'q', .. }, .. },
}

#[test]
fn trailing_token_span() {
    let err = Parser::parse("^done,a=\"1\"{}").unwrap_err();
    assert_eq!(err.span(), Span::new(11, 13));
}

#[test]
fn unexpected_end_points_past_line() {
    let line = "^done,a=";
    let err = Parser::parse(line).unwrap_err();
    assert_eq!(err.span(), Span::empty(line.len()));
}

#[test]
fn duplicate_points_at_second_name() {
    let err = Parser::parse("^done,ab=\"1\",ab=\"2\"").unwrap_err();
    assert_eq!(err.span(), Span::new(13, 15));
}

#[test]
fn class_error_carries_the_word() {
    let err = Parser::parse("^bogus").unwrap_err();
    match err {
        ParseError::Class(ClassError { name, span, .. }) => {
            assert_eq!(name, "bogus");
            assert_eq!(span, Span::new(1, 6));
        }
        other => panic!("expected class error, got {other:?}"),
    }
}

#[test]
fn invalid_utf8_bytes_are_lex_errors() {
    let err = Parser::parse_bytes(b"~\"\xff\"").unwrap_err();
    assert!(matches!(err, ParseError::Lex(LexError::NonAscii { byte: 0xff, .. })));
    assert_eq!(err.span(), Span::new(2, 3));
}

#[test]
fn context_renders_caret_under_span() {
    let line = "^done,a=b";
    let err = Parser::parse(line).unwrap_err();
    let context = err.context(line, 80);
    assert!(context.contains(line), "{context}");
    assert!(context.contains('^'), "{context}");
}
