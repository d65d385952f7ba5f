// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking transport: the debugger child process and its line framing.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command as ProcessCommand, ExitStatus, Stdio};

use gdbmi_wire::{Command, Encoded, EncodingError, Parser, TokenCounter};
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::error::{ContractError, SessionError};
use crate::sync::{Pump, Pumped};

/// Owns the debugger process, its pipes and the session's token counter.
pub struct Transport {
    child: Child,
    writer: Option<BufWriter<ChildStdin>>,
    reader: BufReader<ChildStdout>,
    tokens: TokenCounter,
    buf: Vec<u8>,
}

impl Transport {
    /// Spawn `<program> --interpreter=<name> [extra args]`.
    ///
    /// The environment is inherited unmodified and stderr stays attached
    /// to ours.
    pub fn spawn(config: &SessionConfig) -> Result<Self, SessionError> {
        debug!(
            program = %config.program.display(),
            args = ?config.args(),
            "spawning debugger"
        );

        let mut child = ProcessCommand::new(&config.program)
            .args(config.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| SessionError::Spawn { program: config.program.clone(), source })?;

        let stdin = child.stdin.take().ok_or(SessionError::MissingPipe("stdin"))?;
        let stdout = child.stdout.take().ok_or(SessionError::MissingPipe("stdout"))?;

        debug!(pid = child.id(), "debugger spawned");

        Ok(Self {
            child,
            writer: Some(BufWriter::new(stdin)),
            reader: BufReader::new(stdout),
            tokens: TokenCounter::new(),
            buf: Vec::new(),
        })
    }

    pub fn pid(&self) -> u32 {
        self.child.id()
    }

    /// Validate and render a command with the next token.
    pub fn encode(&mut self, command: &Command) -> Result<Encoded, EncodingError> {
        command.encode(&mut self.tokens)
    }

    /// Write an encoded command and its continuation lines.
    pub fn send(&mut self, encoded: &Encoded) -> Result<(), SessionError> {
        let writer = self.writer.as_mut().ok_or(ContractError::InputClosed)?;
        for line in encoded.lines() {
            debug!(token = encoded.token, line, "send");
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write one line verbatim, without a token.
    pub fn send_line(&mut self, line: &str) -> Result<(), SessionError> {
        let writer = self.writer.as_mut().ok_or(ContractError::InputClosed)?;
        debug!(line, "send raw");
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Read one line without its terminator. `None` at end of stream.
    ///
    /// A final unterminated line is still returned.
    pub fn recv_line(&mut self) -> Result<Option<Vec<u8>>, SessionError> {
        self.buf.clear();
        let n = self.reader.read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            debug!("debugger output ended");
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        Ok(Some(self.buf.clone()))
    }

    /// Send SIGINT.
    pub fn interrupt(&mut self) -> Result<(), SessionError> {
        self.signal(Signal::SIGINT)
    }

    /// Send SIGTERM.
    pub fn terminate(&mut self) -> Result<(), SessionError> {
        self.signal(Signal::SIGTERM)
    }

    /// Send SIGKILL.
    pub fn kill(&mut self) -> Result<(), SessionError> {
        self.signal(Signal::SIGKILL)
    }

    /// Shut down the debugger's stdin. Idempotent.
    pub fn close(&mut self) -> Result<(), SessionError> {
        if let Some(mut writer) = self.writer.take() {
            debug!("closing debugger input");
            writer.flush()?;
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }

    /// Close input and wait for the process to exit.
    pub fn wait(&mut self) -> Result<ExitStatus, SessionError> {
        self.close()?;
        Ok(self.child.wait()?)
    }

    fn signal(&mut self, sig: Signal) -> Result<(), SessionError> {
        // A reaped pid may already belong to another process.
        if self.child.try_wait()?.is_some() {
            debug!(signal = ?sig, "debugger already exited, not signalling");
            return Ok(());
        }
        debug!(pid = self.child.id(), signal = ?sig, "signalling debugger");
        signal::kill(Pid::from_raw(self.child.id() as i32), sig)?;
        Ok(())
    }
}

impl Pump for Transport {
    fn pump(&mut self) -> Result<Pumped, SessionError> {
        let Some(line) = self.recv_line()? else {
            return Ok(Pumped::EndOfStream);
        };
        debug!(line = %String::from_utf8_lossy(&line), "recv");
        Parser::parse_bytes(&line)
            .map(Pumped::Record)
            .map_err(|e| SessionError::parse(&line, e))
    }
}

impl Drop for Transport {
    fn drop(&mut self) {
        if let Ok(None) = self.child.try_wait() {
            warn!(pid = self.child.id(), "debugger still running at drop, killing");
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}
