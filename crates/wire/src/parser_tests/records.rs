// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One test per record kind, plus the documented literal lines.

use super::macros::{bytes, fields};
use crate::class::{AsyncClass, ResultClass};
use crate::parser::Parser;
use crate::record::{AsyncKind, Mapping, Record, StreamKind};

parse_tests! {
    prompt_literal: "(gdb) " => Record::Prompt,
    tokened_done_with_value: "1^done,value=\"42\"" => Record::Result {
        token: Some(1),
        class: ResultClass::Done,
        fields: fields(&[("value", bytes("42"))]),
    },
    bare_done: "^done" => Record::Result {
        token: None,
        class: ResultClass::Done,
        fields: Mapping::new(),
    },
    connected: "^connected" => Record::Result {
        token: None,
        class: ResultClass::Connected,
        fields: Mapping::new(),
    },
    error_with_msg: "4^error,msg=\"Undefined command: \\\"foo\\\".\"" => Record::Result {
        token: Some(4),
        class: ResultClass::Error,
        fields: fields(&[("msg", bytes("Undefined command: \"foo\"."))]),
    },
    exit: "^exit" => Record::Result {
        token: None,
        class: ResultClass::Exit,
        fields: Mapping::new(),
    },
    notify_thread_created: "=thread-created,id=\"1\"" => Record::Async {
        kind: AsyncKind::Notify,
        token: None,
        class: AsyncClass::ThreadCreated,
        fields: fields(&[("id", bytes("1"))]),
    },
    exec_running_with_token: "7*running,thread-id=\"all\"" => Record::Async {
        kind: AsyncKind::Exec,
        token: Some(7),
        class: AsyncClass::Running,
        fields: fields(&[("thread_id", bytes("all"))]),
    },
    status_record: "+library-loaded" => Record::Async {
        kind: AsyncKind::Status,
        token: None,
        class: AsyncClass::LibraryLoaded,
        fields: Mapping::new(),
    },
    console_stream: "~\"hi\\n\"" => Record::Stream {
        kind: StreamKind::Console,
        payload: b"hi\n".to_vec(),
    },
    target_stream: "@\"out\"" => Record::Stream {
        kind: StreamKind::Target,
        payload: b"out".to_vec(),
    },
    log_stream_raw_bytes: "&\"\\377\\000\"" => Record::Stream {
        kind: StreamKind::Log,
        payload: vec![0xff, 0x00],
    },
}

#[test]
fn running_result_parses_as_done() {
    let running = Parser::parse("5^running,a=\"1\"").unwrap();
    let done = Parser::parse("5^done,a=\"1\"").unwrap();
    assert_eq!(running, done);
    assert_eq!(running.result_class(), Some(ResultClass::Done));
}

#[test]
fn running_stays_running_on_exec_records() {
    let record = Parser::parse("*running").unwrap();
    assert_eq!(record.async_class(), Some(AsyncClass::Running));
}

#[test]
fn prompt_requires_trailing_space() {
    assert!(Parser::parse("(gdb)").is_err());
    assert!(Parser::parse("(gdb)  ").is_err());
}

#[test]
fn parses_raw_bytes() {
    let record = Parser::parse_bytes(b"^done").unwrap();
    assert_eq!(record.result_class(), Some(ResultClass::Done));
}

#[test]
fn stopped_record_from_a_real_session() {
    let line = concat!(
        "*stopped,reason=\"breakpoint-hit\",disp=\"keep\",bkptno=\"1\",",
        "frame={addr=\"0x0000555555555131\",func=\"main\",args=[],",
        "file=\"hello.c\",fullname=\"/tmp/hello.c\",line=\"3\",arch=\"i386:x86-64\"},",
        "thread-id=\"1\",stopped-threads=\"all\",core=\"2\""
    );
    let record = Parser::parse(line).unwrap();
    assert_eq!(record.async_class(), Some(AsyncClass::Stopped));
    let frame = record.get("frame").unwrap();
    assert_eq!(frame.get("func").and_then(|v| v.as_str()), Some("main"));
    assert_eq!(frame.get("args").and_then(|v| v.as_sequence()).map(|a| a.len()), Some(0));
    assert_eq!(record.get("stopped_threads").and_then(|v| v.as_str()), Some("all"));

    let names: Vec<_> = record.fields().unwrap().keys().cloned().collect();
    assert_eq!(
        names,
        ["reason", "disp", "bkptno", "frame", "thread_id", "stopped_threads", "core"]
    );
}
