// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("parse")
        .stdout_has("exec")
        .stdout_has("encode");
}

#[test]
fn version_shows_package_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn exec_requires_a_command() {
    cli().args(&["exec"]).fails().stderr_has("Usage:");
}
