// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking embedding: one debugger, one caller, one wait at a time.

use std::process::ExitStatus;

use gdbmi_wire::{Command, Record};
use tracing::debug;

use crate::config::SessionConfig;
use crate::error::{ContractError, SessionError};
use crate::sync::{Pump, Pumped, ReplySynchronizer};
use crate::transport::Transport;

/// A debugger session driven by blocking calls.
///
/// ```ignore
/// let mut gdb = MiSession::spawn(&SessionConfig::from_env())?;
/// let replies = gdb.raw_command(&Command::new("gdb-version"))?;
/// ```
pub struct MiSession {
    transport: Transport,
    sync: ReplySynchronizer,
    startup: Vec<Record>,
}

impl MiSession {
    /// Spawn the debugger and consume its greeting.
    pub fn spawn(config: &SessionConfig) -> Result<Self, SessionError> {
        Self::from_transport(Transport::spawn(config)?)
    }

    /// Take over a spawned transport and consume its greeting.
    ///
    /// Everything up to and including the first prompt is kept apart in
    /// [`MiSession::startup_records`] so that prompt can never complete a
    /// caller's first wait.
    pub fn from_transport(mut transport: Transport) -> Result<Self, SessionError> {
        let mut sync = ReplySynchronizer::new();
        let mut startup = Vec::new();
        loop {
            match transport.pump()? {
                Pumped::Record(record) => {
                    let done = record.is_prompt();
                    startup.push(record);
                    if done {
                        break;
                    }
                }
                Pumped::EndOfStream => {
                    sync.handle_end();
                    break;
                }
            }
        }
        debug!(records = startup.len(), ended = sync.is_ended(), "session started");
        Ok(Self { transport, sync, startup })
    }

    /// Records the debugger emitted before its first prompt, prompt included.
    pub fn startup_records(&self) -> &[Record] {
        &self.startup
    }

    /// Encode `command` with the next token and write it. Returns the token.
    ///
    /// Nothing is written, and no token is used, if encoding fails or the
    /// debugger's output has already ended.
    pub fn encode_and_send(&mut self, command: &Command) -> Result<u64, SessionError> {
        self.check_writable()?;
        let encoded = self.transport.encode(command)?;
        self.transport.send(&encoded)?;
        Ok(encoded.token)
    }

    /// Write a line as-is, e.g. a hand-written MI command.
    pub fn send_raw(&mut self, line: &str) -> Result<(), SessionError> {
        self.check_writable()?;
        self.transport.send_line(line)
    }

    fn check_writable(&self) -> Result<(), ContractError> {
        if self.transport.is_closed() {
            return Err(ContractError::InputClosed);
        }
        if self.sync.is_ended() {
            return Err(ContractError::StreamEnded);
        }
        Ok(())
    }

    /// Block until the next prompt, or end of stream.
    pub fn wait_for_replies(&mut self) -> Result<Vec<Record>, SessionError> {
        self.sync.wait_for_replies(&mut self.transport)
    }

    /// Block until `predicate` accepts a record, or end of stream.
    pub fn run_until<F>(&mut self, predicate: F) -> Result<Vec<Record>, SessionError>
    where
        F: FnMut(&Record) -> bool + Send + 'static,
    {
        self.sync.run_until(predicate, &mut self.transport)
    }

    /// Send a command and wait for its replies.
    pub fn raw_command(&mut self, command: &Command) -> Result<Vec<Record>, SessionError> {
        self.encode_and_send(command)?;
        self.wait_for_replies()
    }

    /// Unsolicited records that arrived between waits, oldest first.
    pub fn take_unclaimed(&mut self) -> Vec<Record> {
        self.sync.drain_queue()
    }

    /// True once the debugger's output has permanently ended.
    pub fn is_ended(&self) -> bool {
        self.sync.is_ended()
    }

    pub fn pid(&self) -> u32 {
        self.transport.pid()
    }

    pub fn interrupt(&mut self) -> Result<(), SessionError> {
        self.transport.interrupt()
    }

    pub fn terminate(&mut self) -> Result<(), SessionError> {
        self.transport.terminate()
    }

    pub fn kill(&mut self) -> Result<(), SessionError> {
        self.transport.kill()
    }

    /// Close the debugger's input. It normally exits on its own after this.
    pub fn close(&mut self) -> Result<(), SessionError> {
        self.transport.close()
    }

    /// Close input and reap the process.
    pub fn wait(mut self) -> Result<ExitStatus, SessionError> {
        self.transport.wait()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
