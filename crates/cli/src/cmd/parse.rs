// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gdbmi parse`: offline parsing of captured MI output.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use gdbmi_wire::Parser;

use super::write_record;
use crate::color;
use crate::ExitError;

/// Widest caret snippet printed for a malformed line.
const SNIPPET_WIDTH: usize = 100;

#[derive(Args)]
pub struct ParseArgs {
    /// File of MI output lines (default: stdin)
    pub file: Option<PathBuf>,

    /// Pretty-print each record
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: ParseArgs) -> Result<()> {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let failed = match &args.file {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            parse_stream(BufReader::new(file), &mut out, &mut err, args.pretty)?
        }
        None => parse_stream(io::stdin().lock(), &mut out, &mut err, args.pretty)?,
    };
    if failed > 0 {
        return Err(ExitError::new(1, format!("{failed} malformed line(s)")).into());
    }
    Ok(())
}

/// Parse every line of `input`; records go to `out`, diagnostics to `err`.
///
/// Blank lines are skipped. Returns the number of malformed lines.
pub fn parse_stream(
    mut input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
    pretty: bool,
) -> Result<usize> {
    let mut buf = Vec::new();
    let mut lineno = 0usize;
    let mut failed = 0usize;
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lineno += 1;
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        if buf.is_empty() {
            continue;
        }
        match Parser::parse_bytes(&buf) {
            Ok(record) => write_record(out, &record, pretty)?,
            Err(e) => {
                failed += 1;
                let text = String::from_utf8_lossy(&buf);
                writeln!(err, "{} {}", color::error(&format!("line {lineno}:")), e)?;
                writeln!(err, "{}", color::context(&e.context(&text, SNIPPET_WIDTH)))?;
            }
        }
    }
    Ok(failed)
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
