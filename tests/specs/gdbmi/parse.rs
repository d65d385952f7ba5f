// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gdbmi parse` specs

use crate::prelude::*;

#[test]
fn parses_stdin_into_json_lines() {
    let run = cli()
        .args(&["parse"])
        .stdin("1^done,value=\"42\"\n=thread-created,id=\"1\"\n~\"hi\\n\"\n(gdb) \n")
        .passes();

    let records = run.json_lines();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["type"], "result");
    assert_eq!(records[0]["token"], 1);
    assert_eq!(records[0]["class"], "done");
    assert_eq!(records[0]["fields"]["value"], "42");
    assert_eq!(records[1]["kind"], "notify");
    assert_eq!(records[1]["class"], "thread_created");
    assert_eq!(records[2]["kind"], "console");
    assert_eq!(records[2]["payload"], "hi\n");
    assert_eq!(records[3]["type"], "prompt");
}

#[test]
fn parses_a_file() {
    let scratch = Scratch::new();
    let path = scratch.file("capture.mi", "^running\n*running,thread-id=\"all\"\n");

    let run = cli().args(&["parse", path.to_str().unwrap()]).passes();

    let records = run.json_lines();
    assert_eq!(records[0]["class"], "done");
    assert_eq!(records[1]["fields"]["thread_id"], "all");
}

#[test]
fn malformed_lines_fail_after_reporting_all() {
    cli()
        .args(&["parse"])
        .stdin("~\"\\101\"\n^done\n^finished\n")
        .fails()
        .stdout_has("\"class\":\"done\"")
        .stderr_has("line 1:")
        .stderr_has("line 3:")
        .stderr_has("2 malformed line(s)");
}

#[test]
fn missing_file_is_an_error() {
    cli().args(&["parse", "/nonexistent/capture.mi"]).fails().stderr_has("cannot open");
}
