// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outbound command encoding.
//!
//! Every quoted value is written as `\NNN` octal escapes, one per
//! character. The debugger accepts that for any ASCII text, so no value
//! can be misread as a flag, separator or line end.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::error::EncodingError;

/// Value of a command flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// Omitted from the wire line.
    Off,
    /// Written as a bare flag.
    On,
    /// Written as the flag followed by a quoted value.
    Text(String),
}

impl From<bool> for FlagValue {
    fn from(on: bool) -> Self {
        if on {
            FlagValue::On
        } else {
            FlagValue::Off
        }
    }
}

impl From<&str> for FlagValue {
    fn from(s: &str) -> Self {
        FlagValue::from(s.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(s: String) -> Self {
        if s.is_empty() {
            FlagValue::On
        } else {
            FlagValue::Text(s)
        }
    }
}

impl<T: Into<FlagValue>> From<Option<T>> for FlagValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FlagValue::Off, Into::into)
    }
}

/// Positional argument; `None` is dropped from the wire line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg(Option<String>);

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg(Some(s.to_string()))
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg(Some(s))
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        Arg(value.and_then(|v| v.into().0))
    }
}

macro_rules! numeric_conversions {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FlagValue {
                fn from(n: $ty) -> Self {
                    FlagValue::Text(n.to_string())
                }
            }

            impl From<$ty> for Arg {
                fn from(n: $ty) -> Self {
                    Arg(Some(n.to_string()))
                }
            }
        )*
    };
}

numeric_conversions!(u8, u16, u32, u64, usize, i32, i64);

/// A logical MI command, before a token is assigned.
///
/// ```ignore
/// let cmd = Command::new("break-insert").flag("t", true).arg("main");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    name: String,
    args: Vec<Arg>,
    flags: BTreeMap<String, FlagValue>,
    extra_lines: Vec<String>,
}

impl Command {
    /// `name` is the MI operation without its leading dash, e.g. `gdb-version`.
    pub fn new(name: impl Into<String>) -> Self {
        Command { name: name.into(), ..Default::default() }
    }

    pub fn arg(mut self, value: impl Into<Arg>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn args<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }

    /// Set a flag. Setting the same name twice keeps the last value.
    pub fn flag(mut self, name: impl Into<String>, value: impl Into<FlagValue>) -> Self {
        self.flags.insert(name.into(), value.into());
        self
    }

    /// Append a verbatim continuation line. These bypass quoting.
    pub fn extra_line(mut self, line: impl Into<String>) -> Self {
        self.extra_lines.push(line.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check that every part of the command can be written.
    pub fn validate(&self) -> Result<(), EncodingError> {
        check_name("command name", &self.name)?;
        for (name, value) in &self.flags {
            check_name("flag name", name)?;
            if let FlagValue::Text(text) = value {
                check_ascii("flag value", text)?;
            }
        }
        for Arg(value) in &self.args {
            if let Some(text) = value {
                check_ascii("argument", text)?;
            }
        }
        for line in &self.extra_lines {
            check_line("continuation line", line)?;
        }
        Ok(())
    }

    /// Validate, then draw a token from `counter` and render.
    ///
    /// A command that fails validation does not consume a token.
    pub fn encode(&self, counter: &mut TokenCounter) -> Result<Encoded, EncodingError> {
        self.validate()?;
        let token = counter.next_token();
        Ok(self.render(token))
    }

    /// Render with a given token. Assumes [`Command::validate`] passed.
    pub fn render(&self, token: u64) -> Encoded {
        let mut line = format!("{}-{}", token, self.name);

        let mut has_flags = false;
        for (name, value) in &self.flags {
            if *value == FlagValue::Off {
                continue;
            }
            has_flags = true;
            let name = name.replace('_', "-");
            line.push(' ');
            line.push_str(if name.chars().count() == 1 { "-" } else { "--" });
            line.push_str(&name);
            if let FlagValue::Text(text) = value {
                line.push(' ');
                push_quoted(&mut line, text);
            }
        }

        let positionals: Vec<&str> = self.args.iter().filter_map(|Arg(a)| a.as_deref()).collect();
        if has_flags && !positionals.is_empty() {
            line.push_str(" --");
        }
        for arg in positionals {
            line.push(' ');
            push_quoted(&mut line, arg);
        }

        Encoded { token, line, extra_lines: self.extra_lines.clone() }
    }
}

/// A rendered command ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub token: u64,
    pub line: String,
    pub extra_lines: Vec<String>,
}

impl Encoded {
    /// The main line followed by any continuation lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.line.as_str()).chain(self.extra_lines.iter().map(String::as_str))
    }
}

/// Monotonic correlation token source, starting at zero.
#[derive(Debug, Default)]
pub struct TokenCounter {
    next: u64,
}

impl TokenCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_token(&mut self) -> u64 {
        let token = self.next;
        self.next = self.next.wrapping_add(1);
        token
    }

    /// The token the next command will receive.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

fn push_quoted(out: &mut String, text: &str) {
    out.push('"');
    for byte in text.bytes() {
        // Writing to a String cannot fail.
        let _ = write!(out, "\\{:03o}", byte);
    }
    out.push('"');
}

fn check_ascii(what: &'static str, text: &str) -> Result<(), EncodingError> {
    match text.chars().find(|c| !c.is_ascii()) {
        Some(ch) => Err(EncodingError::NonAscii { what, ch }),
        None => Ok(()),
    }
}

fn check_line(what: &'static str, text: &str) -> Result<(), EncodingError> {
    check_ascii(what, text)?;
    if text.contains(['\n', '\r']) {
        return Err(EncodingError::LineBreak { what });
    }
    Ok(())
}

/// Names are written bare, so anything that could split them into extra
/// words on the wire is refused.
fn check_name(what: &'static str, name: &str) -> Result<(), EncodingError> {
    check_line(what, name)?;
    if name.is_empty() {
        return Err(EncodingError::EmptyName { what });
    }
    match name.chars().find(|&c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_')) {
        Some(ch) => Err(EncodingError::InvalidNameChar { what, ch }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "encoder_tests.rs"]
mod tests;
