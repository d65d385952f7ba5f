// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Debugger sessions over the MI protocol.
//!
//! [`MiSession`] is the blocking embedding: send a command, then pump the
//! transport one line at a time until the reply is complete.
//! [`AsyncSession`] is the event-driven embedding: every record is handed
//! to a [`RecordHandler`] as it arrives.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod config;
mod driver;
pub mod env;
mod error;
mod session;
mod sync;
mod transport;

#[cfg(test)]
mod test_support;

pub use commands::{BreakOpts, MiCommands};
pub use config::SessionConfig;
pub use driver::{AsyncSession, Outbox, RecordHandler};
pub use error::{ContractError, SessionError};
pub use session::MiSession;
pub use sync::{Pump, Pumped, ReplySynchronizer};
pub use transport::Transport;
