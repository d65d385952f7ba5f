// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use yare::parameterized;

fn line(cmd: Command) -> String {
    cmd.encode(&mut TokenCounter::new()).unwrap().line
}

#[test]
fn break_insert_temporary_main() {
    let cmd = Command::new("break-insert").arg("main").flag("t", true);
    assert_eq!(line(cmd), r#"0-break-insert -t -- "\155\141\151\156""#);
}

#[parameterized(
    bare_name = { Command::new("gdb-version"), "0-gdb-version" },
    positional_only = { Command::new("exec-run").arg("x"), r#"0-exec-run "\170""# },
    flag_only = { Command::new("exec-run").flag("all", true), "0-exec-run --all" },
    false_flag_omitted = { Command::new("exec-run").flag("all", false).arg("x"), r#"0-exec-run "\170""# },
    none_flag_omitted = {
        Command::new("exec-run").flag("thread_group", None::<&str>),
        "0-exec-run"
    },
    empty_value_is_bare = { Command::new("x").flag("f", ""), "0-x -f" },
    valued_short_flag = { Command::new("x").flag("c", "a"), r#"0-x -c "\141""# },
    valued_long_flag = {
        Command::new("x").flag("thread_group", "i1"),
        r#"0-x --thread-group "\151\061""#
    },
    numeric_flag = { Command::new("x").flag("i", 3u32), r#"0-x -i "\063""# },
    none_args_dropped = {
        Command::new("x").arg(None::<&str>).arg("a").arg(None::<String>),
        r#"0-x "\141""#
    },
    separator_needs_real_positional = {
        Command::new("x").flag("t", true).arg(None::<&str>),
        "0-x -t"
    },
    empty_string_argument = { Command::new("x").arg(""), r#"0-x """# },
    quote_and_space = { Command::new("x").arg("a \"b\""), r#"0-x "\141\040\042\142\042""# },
    newline_in_value = { Command::new("x").arg("a\nb"), r#"0-x "\141\012\142""# },
)]
fn encodes(cmd: Command, expected: &str) {
    assert_eq!(line(cmd), expected);
}

#[test]
fn flags_sorted_regardless_of_call_order() {
    let a = Command::new("x").flag("z", true).flag("a", "1").flag("m", true);
    let b = Command::new("x").flag("m", true).flag("z", true).flag("a", "1");
    assert_eq!(line(a.clone()), line(b));
    assert_eq!(line(a), r#"0-x -a "\061" -m -z"#);
}

#[test]
fn continuation_lines_are_verbatim() {
    let cmd = Command::new("interpreter-exec")
        .arg("console")
        .arg("commands 1")
        .extra_line("silent")
        .extra_line("end");
    let encoded = cmd.encode(&mut TokenCounter::new()).unwrap();
    let lines: Vec<_> = encoded.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1..], ["silent", "end"]);
}

#[parameterized(
    empty_name = { Command::new(""), EncodingError::EmptyName { what: "command name" } },
    empty_flag_name = {
        Command::new("exec-run").flag("", true).arg("x"),
        EncodingError::EmptyName { what: "flag name" }
    },
    space_in_flag_name = {
        Command::new("exec-run").flag("all --thread-group i1", true),
        EncodingError::InvalidNameChar { what: "flag name", ch: ' ' }
    },
    quote_in_flag_name = {
        Command::new("x").flag("a\"b", "v"),
        EncodingError::InvalidNameChar { what: "flag name", ch: '"' }
    },
    space_in_command_name = {
        Command::new("gdb-exit -x"),
        EncodingError::InvalidNameChar { what: "command name", ch: ' ' }
    },
    non_ascii_arg = {
        Command::new("x").arg("é"),
        EncodingError::NonAscii { what: "argument", ch: 'é' }
    },
    non_ascii_flag_value = {
        Command::new("x").flag("c", "ü"),
        EncodingError::NonAscii { what: "flag value", ch: 'ü' }
    },
    non_ascii_name = {
        Command::new("brëak"),
        EncodingError::NonAscii { what: "command name", ch: 'ë' }
    },
    line_break_in_name = {
        Command::new("x\ny"),
        EncodingError::LineBreak { what: "command name" }
    },
    line_break_in_continuation = {
        Command::new("x").extra_line("a\rb"),
        EncodingError::LineBreak { what: "continuation line" }
    },
)]
fn rejects(cmd: Command, expected: EncodingError) {
    assert_eq!(cmd.validate(), Err(expected));
}

#[test]
fn rejected_command_does_not_consume_a_token() {
    let mut counter = TokenCounter::new();
    assert!(Command::new("x").arg("ß").encode(&mut counter).is_err());
    assert_eq!(counter.peek(), 0);
    assert_eq!(Command::new("x").encode(&mut counter).unwrap().token, 0);
}

fn arb_command() -> impl Strategy<Value = Command> {
    (
        "[a-z][a-z-]{0,10}",
        prop::collection::vec(prop::option::of("[ -~]{0,6}"), 0..3),
        prop::collection::vec(("[a-z_]{1,5}", prop::option::of("[ -~]{0,4}")), 0..3),
    )
        .prop_map(|(name, args, flags)| {
            let cmd = Command::new(name).args(args);
            flags.into_iter().fold(cmd, |cmd, (k, v)| cmd.flag(k, v))
        })
}

proptest! {
    #[test]
    fn tokens_strictly_increase(cmds in prop::collection::vec(arb_command(), 1..20)) {
        let mut counter = TokenCounter::new();
        let tokens: Vec<u64> = cmds.iter().map(|c| c.encode(&mut counter).unwrap().token).collect();
        for pair in tokens.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        let encoded = Command::new("x").encode(&mut counter).unwrap();
        prop_assert_eq!(encoded.token, cmds.len() as u64);
    }

    #[test]
    fn line_starts_with_token_and_name(cmd in arb_command(), start in 0u64..1000) {
        let encoded = cmd.render(start);
        let prefix = format!("{}-{}", start, cmd.name());
        prop_assert!(encoded.line.starts_with(&prefix));
        prop_assert!(!encoded.line.contains('\n'));
    }
}
