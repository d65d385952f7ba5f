// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test macros and builders for record parser tests.

use crate::record::{Mapping, Value};

/// Generate parse success tests against an expected record.
///
/// ```ignore
/// parse_tests! {
///     bare_done: "^done" => Record::Result { .. },
/// }
/// ```
macro_rules! parse_tests {
    ($($name:ident: $input:expr => $expected:expr),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let record = Parser::parse($input).expect(concat!("failed to parse: ", $input));
                assert_eq!(record, $expected, "input: {:?}", $input);
            }
        )*
    };
}

/// Generate parse failure tests matching an error pattern.
macro_rules! parse_error_tests {
    ($($name:ident: $input:expr => $error:pat),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let result = Parser::parse($input);
                assert!(
                    matches!(result, Err($error)),
                    "expected error {:?} for input {:?}, got {:?}",
                    stringify!($error), $input, result
                );
            }
        )*
    };
}

pub(super) fn fields(pairs: &[(&str, Value)]) -> Mapping {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

pub(super) fn bytes(s: &str) -> Value {
    Value::from(s)
}

pub(super) fn list(items: Vec<Value>) -> Value {
    Value::Sequence(items)
}

pub(super) fn tuple(pairs: &[(&str, Value)]) -> Value {
    Value::Mapping(fields(pairs))
}
