// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gdbmi`: inspect and drive the GDB machine interface from a shell.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod cmd;
mod color;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Failure that maps to a specific process exit code.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

#[derive(Parser)]
#[command(
    name = "gdbmi",
    version = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH")),
    about = "GDB/MI protocol tools",
    styles = color::styles(),
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse MI output lines and print each record as JSON
    Parse(cmd::parse::ParseArgs),
    /// Run MI commands against a debugger and print the replies as JSON
    Exec(cmd::exec::ExecArgs),
    /// Print the wire line for a command
    Encode(cmd::encode::EncodeArgs),
}

fn main() {
    logging::init();

    let cli = Cli::parse();
    let result: Result<()> = match cli.command {
        Commands::Parse(args) => cmd::parse::run(args),
        Commands::Exec(args) => cmd::exec::run(args),
        Commands::Encode(args) => cmd::encode::run(args),
    };

    if let Err(e) = result {
        if let Some(exit) = e.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("{}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("{} {:#}", color::error("error:"), e);
        std::process::exit(1);
    }
}
