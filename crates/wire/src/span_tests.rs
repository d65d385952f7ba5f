// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn snippet_points_at_span() {
    let snippet = context_snippet("^done,a=\"1\",a=\"2\"", Span::new(12, 13), 80);
    assert_eq!(snippet, "^done,a=\"1\",a=\"2\"\n            ^");
}

#[test]
fn snippet_for_empty_span_has_one_caret() {
    let snippet = context_snippet("^done,", Span::empty(6), 80);
    assert_eq!(snippet, "^done,\n      ^");
}

#[test]
fn snippet_windows_long_lines() {
    let line = format!("^done,value=\"{}\"", "x".repeat(200));
    let snippet = context_snippet(&line, Span::new(150, 151), 40);
    let mut lines = snippet.lines();
    let shown = lines.next().unwrap_or_default();
    let carets = lines.next().unwrap_or_default();
    assert_eq!(shown.len(), 40);
    assert_eq!(carets.trim_start().len(), 1);
    assert_eq!(carets.len(), 21);
}
