// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gdbmi exec` specs, against a scripted stand-in debugger

use crate::prelude::*;

#[test]
fn prints_reply_batches() {
    let scratch = Scratch::new();
    let gdb = scratch.debugger(FAKE_GDB);

    let run = cli()
        .args(&["exec", "--gdb", gdb.to_str().unwrap(), "--", "-gdb-version", "-gdb-exit"])
        .passes();

    let records = run.json_lines();
    let types: Vec<_> = records.iter().map(|r| r["type"].as_str().unwrap().to_string()).collect();
    assert_eq!(types, ["stream", "result", "prompt", "result"]);
    assert_eq!(records[0]["payload"], "GNU gdb (fake) 1.0\n");
    assert_eq!(records[3]["class"], "exit");
}

#[test]
fn startup_records_on_request() {
    let scratch = Scratch::new();
    let gdb = scratch.debugger(FAKE_GDB);

    let run = cli()
        .args(&["exec", "--startup", "--gdb", gdb.to_str().unwrap(), "--", "-gdb-exit"])
        .passes();

    let records = run.json_lines();
    assert_eq!(records[0]["class"], "thread_group_added");
    assert_eq!(records[1]["type"], "prompt");
    assert_eq!(records[2]["class"], "exit");
}

#[test]
fn debugger_from_environment() {
    let scratch = Scratch::new();
    let gdb = scratch.debugger(FAKE_GDB);

    cli()
        .env("GDBMI_GDB", &gdb)
        .args(&["exec", "--", "-list-features"])
        .passes()
        .stdout_has("Undefined MI command");
}

#[test]
fn commands_after_exit_are_refused() {
    let scratch = Scratch::new();
    let gdb = scratch.debugger(FAKE_GDB);

    cli()
        .args(&["exec", "--gdb", gdb.to_str().unwrap(), "--", "-gdb-exit", "-gdb-version"])
        .fails()
        .stdout_has("\"exit\"")
        .stderr_has("debugger exited");
}

#[test]
fn malformed_reply_shows_context() {
    let scratch = Scratch::new();
    let gdb = scratch.debugger(FAKE_GDB);

    cli()
        .args(&["exec", "--gdb", gdb.to_str().unwrap(), "--", "-garbage"])
        .fails()
        .stderr_has("^done,x=y");
}

#[test]
fn missing_debugger_fails_to_start() {
    cli()
        .args(&["exec", "--gdb", "/nonexistent/gdb", "--", "-gdb-version"])
        .fails()
        .stderr_has("Failed to start");
}
