// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
#[serial]
fn styles_returns_styled_when_color_forced() {
    std::env::set_var("COLOR", "1");
    std::env::remove_var("NO_COLOR");

    let debug = format!("{:?}", styles());
    assert_ne!(debug, format!("{:?}", Styles::plain()));
}

#[test]
#[serial]
fn styles_returns_plain_when_no_color() {
    std::env::set_var("NO_COLOR", "1");
    std::env::remove_var("COLOR");

    let debug = format!("{:?}", styles());
    assert_eq!(debug, format!("{:?}", Styles::plain()));
}

#[test]
#[serial]
fn error_produces_ansi_when_color_forced() {
    std::env::set_var("COLOR", "1");
    std::env::remove_var("NO_COLOR");

    let result = error("line 3");
    assert!(result.contains("\x1b[38;5;167m"), "expected ANSI error color");
    assert!(result.contains("line 3"));
    assert!(result.ends_with(RESET));
}

#[test]
#[serial]
fn context_is_plain_when_no_color() {
    std::env::set_var("NO_COLOR", "1");
    std::env::remove_var("COLOR");

    assert_eq!(context("^done"), "^done");
}
