// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gdbmi encode`: show exactly what would be written for a command.

use anyhow::Result;
use clap::Args;
use gdbmi_wire::Command;

#[derive(Args)]
pub struct EncodeArgs {
    /// Command name without the leading dash, e.g. break-insert
    pub name: String,

    /// Positional arguments (put values starting with `-` after `--`)
    pub args: Vec<String>,

    /// Flag as NAME or NAME=VALUE (repeatable)
    #[arg(long = "flag", short = 'f', value_name = "NAME[=VALUE]")]
    pub flags: Vec<String>,

    /// Verbatim continuation line (repeatable)
    #[arg(long = "line", value_name = "TEXT")]
    pub lines: Vec<String>,

    /// Correlation token to render with
    #[arg(long, default_value_t = 0)]
    pub token: u64,
}

pub fn run(args: EncodeArgs) -> Result<()> {
    let command = build(&args);
    command.validate()?;
    for line in command.render(args.token).lines() {
        println!("{line}");
    }
    Ok(())
}

fn build(args: &EncodeArgs) -> Command {
    let command = Command::new(args.name.as_str()).args(args.args.iter().map(String::as_str));
    let command = args.flags.iter().fold(command, |cmd, flag| match flag.split_once('=') {
        Some((name, value)) => cmd.flag(name, value),
        None => cmd.flag(flag.as_str(), true),
    });
    args.lines.iter().fold(command, |cmd, line| cmd.extra_line(line.as_str()))
}

#[cfg(test)]
#[path = "encode_tests.rs"]
mod tests;
