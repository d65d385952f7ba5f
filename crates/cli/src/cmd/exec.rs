// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gdbmi exec`: run raw MI commands through a blocking session.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use gdbmi_session::{MiSession, SessionConfig, SessionError};
use tracing::debug;

use super::write_record;
use crate::color;

#[derive(Args)]
pub struct ExecArgs {
    /// Debugger program (default: $GDBMI_GDB, then gdb)
    #[arg(long, value_name = "PATH")]
    pub gdb: Option<PathBuf>,

    /// MI interpreter name (default: $GDBMI_INTERPRETER, then mi2)
    #[arg(long, value_name = "NAME")]
    pub interpreter: Option<String>,

    /// Also print the records emitted before the first prompt
    #[arg(long)]
    pub startup: bool,

    /// Pretty-print each record
    #[arg(long)]
    pub pretty: bool,

    /// MI commands sent verbatim, e.g. -gdb-version
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub commands: Vec<String>,
}

impl ExecArgs {
    fn config(&self) -> SessionConfig {
        let mut config = SessionConfig::from_env();
        if let Some(gdb) = &self.gdb {
            config = config.program(gdb);
        }
        if let Some(interpreter) = &self.interpreter {
            config = config.interpreter(interpreter);
        }
        config
    }
}

pub fn run(args: ExecArgs) -> Result<()> {
    for command in &args.commands {
        if !command.is_ascii() || command.contains(['\n', '\r']) {
            bail!("command {command:?} is not a single ASCII line");
        }
    }

    let mut session = MiSession::spawn(&args.config())?;
    let mut out = io::stdout().lock();
    if args.startup {
        for record in session.startup_records() {
            write_record(&mut out, record, args.pretty)?;
        }
    }

    for command in &args.commands {
        if session.is_ended() {
            bail!("debugger exited before {command:?} could be sent");
        }
        debug!(command, "exec");
        session.send_raw(command)?;
        let replies = session.wait_for_replies().map_err(report)?;
        for record in &replies {
            write_record(&mut out, record, args.pretty)?;
        }
        out.flush()?;
    }

    let status = session.wait()?;
    debug!(?status, "debugger exited");
    Ok(())
}

/// Print the caret snippet for a malformed reply before propagating.
fn report(e: SessionError) -> SessionError {
    if let Some(context) = e.context(100) {
        eprintln!("{}", color::context(&context));
    }
    e
}
