// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed helpers for common MI commands.
//!
//! Every helper builds a [`Command`] and hands it to [`MiCommands::execute`].
//! What "execute" means is up to the implementor: the blocking session
//! waits for the replies, the outbox only queues the line.

use gdbmi_wire::{Command, EncodingError, Record};

use crate::driver::Outbox;
use crate::error::SessionError;
use crate::session::MiSession;

pub trait MiCommands {
    type Reply;
    type Error;

    fn execute(&mut self, command: Command) -> Result<Self::Reply, Self::Error>;

    fn gdb_version(&mut self) -> Result<Self::Reply, Self::Error> {
        self.execute(Command::new("gdb-version"))
    }

    fn gdb_exit(&mut self) -> Result<Self::Reply, Self::Error> {
        self.execute(Command::new("gdb-exit"))
    }

    fn list_features(&mut self) -> Result<Self::Reply, Self::Error> {
        self.execute(Command::new("list-features"))
    }

    fn exec_run(
        &mut self,
        all: bool,
        thread_group: Option<&str>,
        start: bool,
    ) -> Result<Self::Reply, Self::Error> {
        self.execute(
            Command::new("exec-run")
                .flag("all", all)
                .flag("thread_group", thread_group)
                .flag("start", start),
        )
    }

    fn exec_continue(
        &mut self,
        reverse: bool,
        all: bool,
        thread_group: Option<&str>,
    ) -> Result<Self::Reply, Self::Error> {
        self.execute(
            Command::new("exec-continue")
                .flag("reverse", reverse)
                .flag("all", all)
                .flag("thread_group", thread_group),
        )
    }

    fn exec_interrupt(&mut self, all: bool, thread_group: Option<&str>) -> Result<Self::Reply, Self::Error> {
        self.execute(Command::new("exec-interrupt").flag("all", all).flag("thread_group", thread_group))
    }

    /// `-break-insert [-t] [-h] [-f] [-d] [-c cond] [-i n] [-p thread] [location]`
    fn break_insert(&mut self, location: Option<&str>, opts: BreakOpts<'_>) -> Result<Self::Reply, Self::Error> {
        self.execute(
            Command::new("break-insert")
                .arg(location)
                .flag("t", opts.temporary)
                .flag("h", opts.hardware)
                .flag("f", opts.pending)
                .flag("d", opts.disabled)
                .flag("a", opts.tracepoint)
                .flag("c", opts.condition)
                .flag("i", opts.ignore_count)
                .flag("p", opts.thread),
        )
    }

    fn data_evaluate_expression(&mut self, expr: &str) -> Result<Self::Reply, Self::Error> {
        self.execute(Command::new("data-evaluate-expression").arg(expr))
    }

    fn interpreter_exec(&mut self, interpreter: &str, command: &str) -> Result<Self::Reply, Self::Error> {
        self.execute(Command::new("interpreter-exec").arg(interpreter).arg(command))
    }

    /// Run a console command without the deprecated echoed copy of its input.
    ///
    /// Commands that open a block (`commands`, `define`) hang here; use
    /// [`MiCommands::cli_multiline`].
    fn cli(&mut self, words: &[&str]) -> Result<Self::Reply, Self::Error> {
        self.interpreter_exec("console", &words.join(" "))
    }

    /// Console command whose body lines follow verbatim, unquoted.
    fn cli_multiline(&mut self, lines: &[&str]) -> Result<Self::Reply, Self::Error> {
        let (first, rest) = lines.split_first().map_or(("", &[][..]), |(f, r)| (*f, r));
        let command = rest.iter().fold(
            Command::new("interpreter-exec").arg("console").arg(first),
            |cmd, line| cmd.extra_line(*line),
        );
        self.execute(command)
    }
}

/// Options for [`MiCommands::break_insert`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakOpts<'a> {
    pub temporary: bool,
    pub hardware: bool,
    pub pending: bool,
    pub disabled: bool,
    pub tracepoint: bool,
    pub condition: Option<&'a str>,
    pub ignore_count: Option<u32>,
    pub thread: Option<u32>,
}

impl MiCommands for MiSession {
    type Reply = Vec<Record>;
    type Error = SessionError;

    fn execute(&mut self, command: Command) -> Result<Vec<Record>, SessionError> {
        self.raw_command(&command)
    }
}

impl MiCommands for Outbox {
    type Reply = u64;
    type Error = EncodingError;

    fn execute(&mut self, command: Command) -> Result<u64, EncodingError> {
        self.send(&command)
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
