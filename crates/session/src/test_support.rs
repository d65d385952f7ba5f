// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test fixtures: a scripted pump and a fake debugger script.

use std::collections::VecDeque;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use gdbmi_wire::{Parser, Record};
use tempfile::TempDir;

use crate::error::SessionError;
use crate::sync::{Pump, Pumped};

pub(crate) fn rec(line: &str) -> Record {
    Parser::parse(line).unwrap()
}

/// Pump that replays a fixed script, then reports end of stream forever.
pub(crate) struct ScriptedPump {
    script: VecDeque<Result<Pumped, SessionError>>,
    pub(crate) pumped: usize,
}

impl ScriptedPump {
    pub(crate) fn lines(lines: &[&str]) -> Self {
        Self { script: lines.iter().map(|l| Ok(Pumped::Record(rec(l)))).collect(), pumped: 0 }
    }

    pub(crate) fn then_error(mut self, error: SessionError) -> Self {
        self.script.push_back(Err(error));
        self
    }
}

impl Pump for ScriptedPump {
    fn pump(&mut self) -> Result<Pumped, SessionError> {
        self.pumped += 1;
        self.script.pop_front().unwrap_or(Ok(Pumped::EndOfStream))
    }
}

/// A shell script standing in for the debugger.
///
/// It prints `startup`, then for every input line prints the matching
/// canned reply (keyed by the text after the token) followed by a prompt.
pub(crate) struct FakeDebugger {
    _dir: TempDir,
    pub(crate) path: PathBuf,
}

impl FakeDebugger {
    pub(crate) fn new(body: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake-gdb");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "#!/bin/sh").unwrap();
        file.write_all(body.as_bytes()).unwrap();
        drop(file);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        Self { _dir: dir, path }
    }

    /// A debugger that greets, then answers each command with canned replies.
    pub(crate) fn echo() -> Self {
        Self::new(
            r#"
say() { printf '%s\n' "$1"; }
say '=thread-group-added,id="i1"'
say '~"GNU gdb (fake) 1.0\n"'
say '(gdb) '
while IFS= read -r line; do
    token=${line%%-*}
    case "$line" in
        *-gdb-exit*)
            say "${token}^exit"
            exit 0 ;;
        *-exec-run*)
            say "${token}^running"
            say '*running,thread-id="all"'
            say '(gdb) '
            say '*stopped,reason="exited-normally"'
            say '(gdb) ' ;;
        *-break-insert*)
            say "${token}^done,bkpt={number=\"1\",type=\"breakpoint\"}"
            say '=breakpoint-modified,bkpt={number="1"}'
            say '(gdb) ' ;;
        *-bogus*)
            say "${token}^done,@oops"
            say '(gdb) ' ;;
        *)
            say "${token}^done"
            say '(gdb) ' ;;
    esac
done
"#,
        )
    }

    pub(crate) fn config(&self) -> crate::SessionConfig {
        crate::SessionConfig::default().program(&self.path)
    }
}
