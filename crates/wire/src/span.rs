// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte ranges within a single MI output line.

/// A byte-offset range in one line of debugger output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Render the line with carets under the span.
///
/// ```text
/// ^done,a="1",a="2"
///             ^
/// ```
///
/// Lines longer than `max_width` are windowed around the span so the caret
/// stays visible.
pub fn context_snippet(line: &str, span: Span, max_width: usize) -> String {
    let start = span.start.min(line.len());
    let window_start = if line.len() > max_width { start.saturating_sub(max_width / 2) } else { 0 };
    let window_end = (window_start + max_width).min(line.len());
    let shown = line.get(window_start..window_end).unwrap_or("");

    let caret_pos = start - window_start;
    let caret_len = span.len().clamp(1, max_width.saturating_sub(caret_pos).max(1));
    format!("{}\n{}{}", shown, " ".repeat(caret_pos), "^".repeat(caret_len))
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
