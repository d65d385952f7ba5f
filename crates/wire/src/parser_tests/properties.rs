// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property tests: canonical text round trip and closed class sets.

use proptest::prelude::*;

use crate::class::{AsyncClass, ResultClass};
use crate::error::ClassError;
use crate::parse_error::ParseError;
use crate::parser::Parser;
use crate::record::{AsyncKind, Mapping, Record, StreamKind, Value};

const BOUNDARY_BYTES: &[u8] = &[0, 1, 6, 7, 13, 14, 31, 32, 34, 92, 126, 127, 255];

/// Field names as the lexer hands them back: lowercase words, dashes
/// normalized to underscores.
fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,4}(_[a-z0-9]{1,3})?"
}

fn arb_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..12),
        prop::collection::vec(prop::sample::select(BOUNDARY_BYTES.to_vec()), 0..12),
    ]
}

fn arb_mapping(inner: impl Strategy<Value = Value>) -> impl Strategy<Value = Mapping> {
    prop::collection::vec((arb_name(), inner), 0..4).prop_map(|pairs| pairs.into_iter().collect())
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = arb_bytes().prop_map(Value::Bytes);
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            arb_mapping(inner.clone()).prop_map(Value::Mapping),
            prop::collection::vec(inner, 0..4).prop_map(Value::Sequence),
        ]
    })
}

fn arb_record() -> impl Strategy<Value = Record> {
    let token = prop::option::of(0u64..100_000);
    prop_oneof![
        Just(Record::Prompt),
        (token.clone(), prop::sample::select(ResultClass::ALL), arb_mapping(arb_value()))
            .prop_map(|(token, class, fields)| Record::Result { token, class, fields }),
        (
            prop::sample::select(vec![AsyncKind::Exec, AsyncKind::Status, AsyncKind::Notify]),
            token,
            prop::sample::select(AsyncClass::ALL),
            arb_mapping(arb_value()),
        )
            .prop_map(|(kind, token, class, fields)| Record::Async { kind, token, class, fields }),
        (
            prop::sample::select(vec![StreamKind::Console, StreamKind::Target, StreamKind::Log]),
            arb_bytes(),
        )
            .prop_map(|(kind, payload)| Record::Stream { kind, payload }),
    ]
}

proptest! {
    #[test]
    fn canonical_text_parses_back(record in arb_record()) {
        let line = record.to_string();
        let parsed = Parser::parse(&line).map_err(|e| TestCaseError::fail(format!("{line}: {e}")))?;
        prop_assert_eq!(parsed, record);
    }

    #[test]
    fn unregistered_class_words_are_rejected(word in "[a-z][a-z-]{0,12}") {
        let normalized = word.replace('-', "_");
        prop_assume!(ResultClass::from_parsed(&normalized).is_none());
        let result = Parser::parse(&format!("^{word}"));
        prop_assert!(
            matches!(result, Err(ParseError::Class(ClassError { .. }))),
            "expected class error for {}, got {:?}", word, result
        );
    }

    #[test]
    fn running_and_done_agree(fields in arb_mapping(arb_value()), token in prop::option::of(0u64..1000)) {
        let done = Record::Result { token, class: ResultClass::Done, fields };
        let line = done.to_string();
        let running_line = line.replacen("^done", "^running", 1);
        prop_assert_eq!(Parser::parse(&running_line).unwrap(), done);
    }
}

#[test]
fn every_registered_class_parses_bare() {
    for name in ResultClass::WIRE_NAMES {
        let line = format!("^{name}");
        assert!(Parser::parse(&line).is_ok(), "{line}");
    }
    for class in AsyncClass::ALL {
        for prefix in ['*', '+', '='] {
            let line = format!("{prefix}{}", class.wire_name());
            let record = Parser::parse(&line).unwrap();
            assert_eq!(record.async_class(), Some(*class), "{line}");
        }
    }
}

#[test]
fn boundary_bytes_survive_each_value_shape() {
    let payload = BOUNDARY_BYTES.to_vec();
    let mut inner = Mapping::new();
    inner.insert("b".to_string(), Value::Bytes(payload.clone()));
    let mut fields = Mapping::new();
    fields.insert("s".to_string(), Value::Bytes(payload.clone()));
    fields.insert("t".to_string(), Value::Mapping(inner));
    fields.insert("l".to_string(), Value::Sequence(vec![Value::Bytes(payload.clone())]));
    let record = Record::Result { token: Some(9), class: ResultClass::Done, fields };

    assert_eq!(Parser::parse(&record.to_string()).unwrap(), record);
    for byte in BOUNDARY_BYTES {
        let stream = Record::Stream { kind: StreamKind::Console, payload: vec![*byte] };
        assert_eq!(Parser::parse(&stream.to_string()).unwrap(), stream, "byte {byte}");
    }
}
