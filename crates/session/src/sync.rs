// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reply synchronization for the blocking embedding.
//!
//! The debugger interleaves unsolicited records with replies and has no
//! universally reliable end-of-reply marker. The synchronizer keeps a FIFO
//! of unclaimed records and at most one completion predicate. Records that
//! arrive while no predicate is active are queued and replayed, in arrival
//! order, through the next one that is installed.

use std::collections::VecDeque;

use gdbmi_wire::Record;
use tracing::trace;

use crate::error::{ContractError, SessionError};

/// Result of advancing the transport by one I/O iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pumped {
    Record(Record),
    /// Permanent. Nothing more will ever arrive.
    EndOfStream,
}

/// A source advanced one I/O iteration at a time.
pub trait Pump {
    fn pump(&mut self) -> Result<Pumped, SessionError>;
}

type Predicate = Box<dyn FnMut(&Record) -> bool + Send>;

/// Queue and hook state for one session.
#[derive(Default)]
pub struct ReplySynchronizer {
    queue: VecDeque<Record>,
    hook: Option<Predicate>,
    batch: Vec<Record>,
    ended: bool,
}

impl ReplySynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a completion predicate and replay queued records through it.
    ///
    /// Replay stops as soon as the predicate is satisfied; later records
    /// stay queued for the next wait.
    pub fn install<F>(&mut self, predicate: F) -> Result<(), ContractError>
    where
        F: FnMut(&Record) -> bool + Send + 'static,
    {
        if self.hook.is_some() {
            return Err(ContractError::WaitInProgress);
        }
        self.hook = Some(Box::new(predicate));
        while self.hook.is_some() {
            let Some(record) = self.queue.pop_front() else {
                break;
            };
            self.handle_record(record);
        }
        Ok(())
    }

    /// Deliver one record, live or replayed.
    pub fn handle_record(&mut self, record: Record) {
        match self.hook.as_mut() {
            Some(hook) => {
                let done = hook(&record);
                self.batch.push(record);
                if done {
                    self.hook = None;
                }
            }
            None => {
                self.queue.push_back(record);
                trace!(depth = self.queue.len(), "queued unclaimed record");
            }
        }
    }

    /// The stream ended: clear any pending predicate as if satisfied.
    pub fn handle_end(&mut self) {
        self.ended = true;
        self.hook = None;
    }

    /// Install `predicate` and pump until it is satisfied or the stream ends.
    ///
    /// Returns every record delivered to the predicate, in order, up to and
    /// including the one that satisfied it. On a pump error the predicate
    /// and partial batch are discarded; the queue is left as it was.
    pub fn run_until<F, P>(&mut self, predicate: F, pump: &mut P) -> Result<Vec<Record>, SessionError>
    where
        F: FnMut(&Record) -> bool + Send + 'static,
        P: Pump + ?Sized,
    {
        if self.ended {
            return Err(ContractError::StreamEnded.into());
        }
        self.install(predicate)?;
        while self.hook.is_some() {
            match pump.pump() {
                Ok(Pumped::Record(record)) => self.handle_record(record),
                Ok(Pumped::EndOfStream) => self.handle_end(),
                Err(e) => {
                    self.hook = None;
                    self.batch.clear();
                    return Err(e);
                }
            }
        }
        Ok(std::mem::take(&mut self.batch))
    }

    /// Wait for the ordinary reply terminator, a prompt.
    pub fn wait_for_replies<P: Pump + ?Sized>(&mut self, pump: &mut P) -> Result<Vec<Record>, SessionError> {
        self.run_until(Record::is_prompt, pump)
    }

    pub fn is_waiting(&self) -> bool {
        self.hook.is_some()
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Take every unclaimed record, oldest first.
    pub fn drain_queue(&mut self) -> Vec<Record> {
        self.queue.drain(..).collect()
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
