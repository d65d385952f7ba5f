// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod encode;
pub mod exec;
pub mod parse;

use std::io::Write;

use anyhow::Result;
use gdbmi_wire::Record;

/// Write one record as a JSON line.
pub(crate) fn write_record(out: &mut impl Write, record: &Record, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, record)?;
    } else {
        serde_json::to_writer(&mut *out, record)?;
    }
    writeln!(out)?;
    Ok(())
}
