// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event-driven embedding on tokio.
//!
//! Each parsed record is handed to a [`RecordHandler`]. The handler is
//! synchronous; anything it wants to send goes into an [`Outbox`], which is
//! flushed once the callback returns and before the next record is read.

use std::process::{ExitStatus, Stdio};

use gdbmi_wire::{Command, EncodingError, Parser, Record, TokenCounter};
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::process::{Child, ChildStdin, ChildStdout};
use tracing::debug;

use crate::config::SessionConfig;
use crate::error::{ContractError, SessionError};

/// Receives session events, strictly one at a time and in arrival order.
///
/// A line that fails to parse, or a failed write, makes
/// [`AsyncSession::run`] return the error at once: `on_session_end` is not
/// called. The session itself stays usable, and calling `run` again
/// resumes with the next line, starting over with `on_session_start`.
pub trait RecordHandler {
    /// Called once before the first record. Startup commands go here.
    fn on_session_start(&mut self, _outbox: &mut Outbox) {}

    /// Called for every record, including the startup greeting.
    fn on_record(&mut self, record: Record, outbox: &mut Outbox);

    /// Called once when the debugger's output permanently ends.
    fn on_session_end(&mut self) {}
}

/// Commands and control requests queued by a handler.
#[derive(Debug, Default)]
pub struct Outbox {
    tokens: TokenCounter,
    lines: Vec<String>,
    signals: Vec<Signal>,
    close: bool,
}

impl Outbox {
    /// Encode `command` with the next token and queue it. Returns the token.
    pub fn send(&mut self, command: &Command) -> Result<u64, EncodingError> {
        let encoded = command.encode(&mut self.tokens)?;
        self.lines.extend(encoded.lines().map(str::to_owned));
        Ok(encoded.token)
    }

    /// Queue a line verbatim.
    pub fn send_raw(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn interrupt(&mut self) {
        self.signals.push(Signal::SIGINT);
    }

    pub fn terminate(&mut self) {
        self.signals.push(Signal::SIGTERM);
    }

    pub fn kill(&mut self) {
        self.signals.push(Signal::SIGKILL);
    }

    /// Shut down the debugger's input after queued lines are written.
    pub fn close(&mut self) {
        self.close = true;
    }

    /// Lines waiting to be written.
    pub fn pending(&self) -> &[String] {
        &self.lines
    }
}

/// A debugger process driven by async reads.
pub struct AsyncSession {
    child: Child,
    writer: Option<BufWriter<ChildStdin>>,
    reader: BufReader<ChildStdout>,
    outbox: Outbox,
    buf: Vec<u8>,
}

impl AsyncSession {
    /// Spawn the debugger. Must be called within a tokio runtime.
    pub fn spawn(config: &SessionConfig) -> Result<Self, SessionError> {
        debug!(program = %config.program.display(), args = ?config.args(), "spawning debugger");

        let mut child = tokio::process::Command::new(&config.program)
            .args(config.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| SessionError::Spawn { program: config.program.clone(), source })?;

        let stdin = child.stdin.take().ok_or(SessionError::MissingPipe("stdin"))?;
        let stdout = child.stdout.take().ok_or(SessionError::MissingPipe("stdout"))?;

        Ok(Self {
            child,
            writer: Some(BufWriter::new(stdin)),
            reader: BufReader::new(stdout),
            outbox: Outbox::default(),
            buf: Vec::new(),
        })
    }

    /// Queue commands outside a handler callback.
    pub fn outbox(&mut self) -> &mut Outbox {
        &mut self.outbox
    }

    /// Drive `handler` until the debugger's output ends.
    pub async fn run<H: RecordHandler + ?Sized>(&mut self, handler: &mut H) -> Result<(), SessionError> {
        handler.on_session_start(&mut self.outbox);
        self.flush().await?;
        while let Some(record) = self.next_record().await? {
            handler.on_record(record, &mut self.outbox);
            self.flush().await?;
        }
        handler.on_session_end();
        Ok(())
    }

    /// Read and parse the next line. `None` once output has ended.
    pub async fn next_record(&mut self) -> Result<Option<Record>, SessionError> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
            debug!("debugger output ended");
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        debug!(line = %String::from_utf8_lossy(&self.buf), "recv");
        Parser::parse_bytes(&self.buf)
            .map(Some)
            .map_err(|e| SessionError::parse(&self.buf, e))
    }

    /// Write queued lines, then apply queued control requests.
    pub async fn flush(&mut self) -> Result<(), SessionError> {
        let lines = std::mem::take(&mut self.outbox.lines);
        if !lines.is_empty() {
            let writer = self.writer.as_mut().ok_or(ContractError::InputClosed)?;
            for line in &lines {
                debug!(line = %line, "send");
                writer.write_all(line.as_bytes()).await?;
                writer.write_all(b"\n").await?;
            }
            writer.flush().await?;
        }
        for sig in std::mem::take(&mut self.outbox.signals) {
            self.signal(sig)?;
        }
        if std::mem::take(&mut self.outbox.close) {
            self.close().await?;
        }
        Ok(())
    }

    pub fn interrupt(&mut self) -> Result<(), SessionError> {
        self.signal(Signal::SIGINT)
    }

    pub fn terminate(&mut self) -> Result<(), SessionError> {
        self.signal(Signal::SIGTERM)
    }

    pub fn kill(&mut self) -> Result<(), SessionError> {
        self.signal(Signal::SIGKILL)
    }

    /// Shut down the debugger's input. Idempotent.
    pub async fn close(&mut self) -> Result<(), SessionError> {
        if let Some(mut writer) = self.writer.take() {
            debug!("closing debugger input");
            writer.shutdown().await?;
        }
        Ok(())
    }

    /// Close input and wait for the process to exit.
    pub async fn wait(&mut self) -> Result<ExitStatus, SessionError> {
        self.close().await?;
        Ok(self.child.wait().await?)
    }

    fn signal(&mut self, sig: Signal) -> Result<(), SessionError> {
        // `id()` is None once the child has been reaped.
        let Some(pid) = self.child.id() else {
            debug!(signal = ?sig, "debugger already exited, not signalling");
            return Ok(());
        };
        debug!(pid, signal = ?sig, "signalling debugger");
        signal::kill(Pid::from_raw(pid as i32), sig)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
