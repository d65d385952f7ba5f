// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::macros::{string, word};
use crate::lexer::Lexer;
use crate::token::{Prefix, TokenKind};

lex_tests! {
    empty_line: "" => [],
    bare_result: "^done" => [TokenKind::Prefix(Prefix::Result), word("done")],
    token_then_prefix: "12^done" => [
        TokenKind::Integer(12),
        TokenKind::Prefix(Prefix::Result),
        word("done"),
    ],
    notify_prefix_at_start: "=thread-created" => [
        TokenKind::Prefix(Prefix::Notify),
        word("thread_created"),
    ],
    exec_prefix: "*stopped" => [TokenKind::Prefix(Prefix::Exec), word("stopped")],
    status_prefix: "+download" => [TokenKind::Prefix(Prefix::Status), word("download")],
    console_stream: "~\"hi\\n\"" => [TokenKind::Prefix(Prefix::Console), string(b"hi\n")],
    target_stream: "@\"x\"" => [TokenKind::Prefix(Prefix::Target), string(b"x")],
    log_stream: "&\"x\"" => [TokenKind::Prefix(Prefix::Log), string(b"x")],
    field_equals_is_not_prefix: "^done,value=\"42\"" => [
        TokenKind::Prefix(Prefix::Result),
        word("done"),
        TokenKind::Comma,
        word("value"),
        TokenKind::Equals,
        string(b"42"),
    ],
    empty_tuple_shortcut: "{}" => [TokenKind::TupleEmpty],
    empty_list_shortcut: "[]" => [TokenKind::ListEmpty],
    tuple_with_field: "{a=\"1\"}" => [
        TokenKind::TupleBegin,
        word("a"),
        TokenKind::Equals,
        string(b"1"),
        TokenKind::TupleEnd,
    ],
    nested_lists: "[[],{}]" => [
        TokenKind::ListBegin,
        TokenKind::ListEmpty,
        TokenKind::Comma,
        TokenKind::TupleEmpty,
        TokenKind::ListEnd,
    ],
    dashes_become_underscores: "original-location" => [word("original_location")],
    digits_then_letters_is_word: "123abc" => [word("123abc")],
    digits_then_dash_is_word: "1-2" => [word("1_2")],
    pure_digits_is_integer: "0" => [TokenKind::Integer(0)],
    prefix_after_word_digit_is_equals: "id1=" => [word("id1"), TokenKind::Equals],
}

span_tests! {
    spans_of_result: "7^done,a=\"b\"" => [(0, 1), (1, 2), (2, 6), (6, 7), (7, 8), (8, 9), (9, 12)],
    spans_of_shortcuts: "{}[]" => [(0, 2), (2, 4)],
}

#[test]
fn large_token_is_integer() {
    let tokens = Lexer::tokenize("18446744073709551615^done").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Integer(u64::MAX));
}
