// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs.

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// The `gdbmi` binary with logging and color turned off.
pub fn cli() -> CliBuilder {
    let mut cmd = Command::cargo_bin("gdbmi").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("GDBMI_LOG").env_remove("GDBMI_GDB");
    CliBuilder { cmd }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output);
        assert!(run.success, "expected success\nstdout:\n{}\nstderr:\n{}", run.stdout, run.stderr);
        run
    }

    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output);
        assert!(!run.success, "expected failure\nstdout:\n{}\nstderr:\n{}", run.stdout, run.stderr);
        run
    }
}

pub struct RunAssert {
    success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for RunAssert {
    fn from(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunAssert {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout.as_str(), expected);
        self
    }

    /// Stdout parsed as one JSON value per line.
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout.lines().map(|l| serde_json::from_str(l).unwrap()).collect()
    }
}

/// A scratch directory for input files and fake debuggers.
pub struct Scratch {
    dir: TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// An executable shell script that stands in for the debugger.
    pub fn debugger(&self, body: &str) -> PathBuf {
        let path = self.file("fake-gdb", &format!("#!/bin/sh\n{body}"));
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }
}

/// Greets, answers `-gdb-version` with console text, exits on `-gdb-exit`.
pub const FAKE_GDB: &str = r#"
say() { printf '%s\n' "$1"; }
say '=thread-group-added,id="i1"'
say '(gdb) '
while IFS= read -r line; do
    case "$line" in
        *-gdb-version*)
            say '~"GNU gdb (fake) 1.0\n"'
            say '^done'
            say '(gdb) ' ;;
        *-gdb-exit*)
            say '^exit'
            exit 0 ;;
        *-garbage*)
            say '^done,x=y'
            say '(gdb) ' ;;
        *)
            say "^error,msg=\"Undefined MI command: $line\""
            say '(gdb) ' ;;
    esac
done
"#;
