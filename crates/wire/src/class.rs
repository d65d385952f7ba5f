// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Closed sets of record class names.
//!
//! Nothing outside these sets parses; a new debugger class needs a new
//! variant here.

crate::class_enum! {
    /// Class of a `^` result record.
    pub enum ResultClass {
        Done => "done",
        Connected => "connected",
        Error => "error",
        Exit => "exit",
    }
}

impl ResultClass {
    /// Result class names the parser accepts, including `running`.
    pub const WIRE_NAMES: &'static [&'static str] = &["done", "running", "connected", "error", "exit"];

    /// Resolve a parsed class word.
    ///
    /// `running` on a result record means the same as `done` and is folded
    /// into it here, so consumers never see it.
    pub fn from_parsed(name: &str) -> Option<Self> {
        match name {
            "running" => Some(ResultClass::Done),
            other => Self::from_name(other),
        }
    }
}

crate::class_enum! {
    /// Class of a `*`, `+` or `=` async record.
    pub enum AsyncClass {
        Running => "running",
        Stopped => "stopped",
        ThreadGroupAdded => "thread_group_added",
        ThreadGroupRemoved => "thread_group_removed",
        ThreadGroupStarted => "thread_group_started",
        ThreadGroupExited => "thread_group_exited",
        ThreadCreated => "thread_created",
        ThreadExited => "thread_exited",
        ThreadSelected => "thread_selected",
        LibraryLoaded => "library_loaded",
        LibraryUnloaded => "library_unloaded",
        TraceframeChanged => "traceframe_changed",
        TsvCreated => "tsv_created",
        TsvDeleted => "tsv_deleted",
        TsvModified => "tsv_modified",
        BreakpointCreated => "breakpoint_created",
        BreakpointModified => "breakpoint_modified",
        BreakpointDeleted => "breakpoint_deleted",
        RecordStarted => "record_started",
        RecordStopped => "record_stopped",
        CmdParamChanged => "cmd_param_changed",
        MemoryChanged => "memory_changed",
    }
}

#[cfg(test)]
#[path = "class_tests.rs"]
mod tests;
