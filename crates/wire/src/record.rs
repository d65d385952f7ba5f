// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed MI records and the values they carry.
//!
//! Records are immutable once built. `Display` writes canonical MI text
//! that [`Parser::parse`](crate::Parser::parse) reads back to an equal record.

use std::fmt;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::class::{AsyncClass, ResultClass};
use crate::lexer::cstring::write_quoted;

/// Field name to value. Equality ignores insertion order.
pub type Mapping = IndexMap<String, Value>;

/// The literal idle marker line.
pub const PROMPT: &str = "(gdb) ";

/// Structured data carried in record fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A decoded string literal. Not necessarily UTF-8.
    Bytes(Vec<u8>),
    Mapping(Mapping),
    Sequence(Vec<Value>),
}

impl Value {
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// The string payload, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a field when this value is a mapping.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.as_mapping().and_then(|m| m.get(name))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Bytes(s.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Value::Mapping(m)
    }
}

impl From<Vec<Value>> for Value {
    fn from(s: Vec<Value>) -> Self {
        Value::Sequence(s)
    }
}

/// Which async channel a `*`, `+` or `=` record arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AsyncKind {
    /// `*` execution state changes
    Exec,
    /// `+` progress of long operations
    Status,
    /// `=` everything else
    Notify,
}

impl AsyncKind {
    pub fn prefix(self) -> char {
        match self {
            AsyncKind::Exec => '*',
            AsyncKind::Status => '+',
            AsyncKind::Notify => '=',
        }
    }
}

/// Which text stream a `~`, `@` or `&` record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamKind {
    /// `~` CLI console output
    Console,
    /// `@` output of the target program
    Target,
    /// `&` debugger internal log
    Log,
}

impl StreamKind {
    pub fn prefix(self) -> char {
        match self {
            StreamKind::Console => '~',
            StreamKind::Target => '@',
            StreamKind::Log => '&',
        }
    }
}

/// One parsed line of debugger output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    /// `(gdb) `: the debugger is idle.
    Prompt,
    /// Reply to a command. `class` is never `running`.
    Result { token: Option<u64>, class: ResultClass, fields: Mapping },
    /// Out-of-band event.
    Async { kind: AsyncKind, token: Option<u64>, class: AsyncClass, fields: Mapping },
    /// Unstructured text.
    Stream {
        kind: StreamKind,
        #[serde(serialize_with = "serialize_lossy")]
        payload: Vec<u8>,
    },
}

impl Record {
    pub fn is_prompt(&self) -> bool {
        matches!(self, Record::Prompt)
    }

    pub fn token(&self) -> Option<u64> {
        match self {
            Record::Result { token, .. } | Record::Async { token, .. } => *token,
            Record::Prompt | Record::Stream { .. } => None,
        }
    }

    pub fn fields(&self) -> Option<&Mapping> {
        match self {
            Record::Result { fields, .. } | Record::Async { fields, .. } => Some(fields),
            Record::Prompt | Record::Stream { .. } => None,
        }
    }

    /// Look up a top-level field of a result or async record.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields().and_then(|f| f.get(name))
    }

    /// Class of a result record.
    pub fn result_class(&self) -> Option<ResultClass> {
        match self {
            Record::Result { class, .. } => Some(*class),
            _ => None,
        }
    }

    /// Class of an async record.
    pub fn async_class(&self) -> Option<AsyncClass> {
        match self {
            Record::Async { class, .. } => Some(*class),
            _ => None,
        }
    }

    /// Payload of a stream record.
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Record::Stream { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

/// Field names are stored with underscores; the wire uses dashes.
fn write_name(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    f.write_str(&name.replace('_', "-"))
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &Mapping) -> fmt::Result {
    for (name, value) in fields {
        f.write_str(",")?;
        write_name(f, name)?;
        write!(f, "={}", value)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bytes(b) => write_quoted(f, b),
            Value::Mapping(m) => {
                f.write_str("{")?;
                for (i, (name, value)) in m.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_name(f, name)?;
                    write!(f, "={}", value)?;
                }
                f.write_str("}")
            }
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, value) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Prompt => f.write_str(PROMPT),
            Record::Result { token, class, fields } => {
                if let Some(token) = token {
                    write!(f, "{}", token)?;
                }
                write!(f, "^{}", class.wire_name())?;
                write_fields(f, fields)
            }
            Record::Async { kind, token, class, fields } => {
                if let Some(token) = token {
                    write!(f, "{}", token)?;
                }
                write!(f, "{}{}", kind.prefix(), class.wire_name())?;
                write_fields(f, fields)
            }
            Record::Stream { kind, payload } => {
                write!(f, "{}", kind.prefix())?;
                write_quoted(f, payload)
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bytes(b) => serializer.serialize_str(&String::from_utf8_lossy(b)),
            Value::Mapping(m) => {
                let mut map = serializer.serialize_map(Some(m.len()))?;
                for (k, v) in m {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

fn serialize_lossy<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
