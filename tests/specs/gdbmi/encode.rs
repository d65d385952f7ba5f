// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gdbmi encode` specs

use crate::prelude::*;

#[test]
fn break_insert_temporary() {
    cli()
        .args(&["encode", "break-insert", "main", "--flag", "t"])
        .passes()
        .stdout_eq("0-break-insert -t -- \"\\155\\141\\151\\156\"\n");
}

#[test]
fn token_and_continuation_lines() {
    cli()
        .args(&["encode", "interpreter-exec", "console", "commands", "--line", "silent", "--line", "end", "--token", "5"])
        .passes()
        .stdout_eq(concat!(
            "5-interpreter-exec \"\\143\\157\\156\\163\\157\\154\\145\" ",
            "\"\\143\\157\\155\\155\\141\\156\\144\\163\"\n",
            "silent\n",
            "end\n",
        ));
}

#[test]
fn non_ascii_argument_is_rejected() {
    cli().args(&["encode", "data-evaluate-expression", "ä"]).fails().stderr_has("non-ASCII");
}
