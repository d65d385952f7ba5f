// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Value grammar: strings, tuples, lists and the legacy list element form.

use super::macros::{bytes, fields, list, tuple};
use crate::class::ResultClass;
use crate::parser::Parser;
use crate::record::{Record, Value};

fn done(rest: &str) -> Record {
    Parser::parse(&format!("^done{rest}")).unwrap()
}

fn done_with(pairs: &[(&str, Value)]) -> Record {
    Record::Result { token: None, class: ResultClass::Done, fields: fields(pairs) }
}

#[test]
fn empty_tuple() {
    assert_eq!(done(",a={}"), done_with(&[("a", tuple(&[]))]));
}

#[test]
fn empty_list() {
    assert_eq!(done(",a=[]"), done_with(&[("a", list(vec![]))]));
}

#[test]
fn tuple_of_strings() {
    assert_eq!(
        done(",bkpt={number=\"1\",type=\"breakpoint\"}"),
        done_with(&[("bkpt", tuple(&[("number", bytes("1")), ("type", bytes("breakpoint"))]))])
    );
}

#[test]
fn list_of_strings() {
    assert_eq!(
        done(",features=[\"frozen-varobjs\",\"python\"]"),
        done_with(&[("features", list(vec![bytes("frozen-varobjs"), bytes("python")]))])
    );
}

#[test]
fn list_of_tuples() {
    assert_eq!(
        done(",groups=[{id=\"i1\"},{id=\"i2\"}]"),
        done_with(&[(
            "groups",
            list(vec![tuple(&[("id", bytes("i1"))]), tuple(&[("id", bytes("i2"))])])
        )])
    );
}

#[test]
fn legacy_named_list_elements_drop_the_name() {
    assert_eq!(
        done(",stack=[frame={level=\"0\"},frame={level=\"1\"}]"),
        done_with(&[(
            "stack",
            list(vec![tuple(&[("level", bytes("0"))]), tuple(&[("level", bytes("1"))])])
        )])
    );
}

#[test]
fn legacy_and_plain_elements_mix() {
    assert_eq!(
        done(",a=[x=\"1\",\"2\",y=[]]"),
        done_with(&[("a", list(vec![bytes("1"), bytes("2"), list(vec![])]))])
    );
}

#[test]
fn deep_nesting() {
    assert_eq!(
        done(",a={b=[{c={d=[\"e\"]}}]}"),
        done_with(&[(
            "a",
            tuple(&[("b", list(vec![tuple(&[("c", tuple(&[("d", list(vec![bytes("e")]))]))])]))])
        )])
    );
}

#[test]
fn dashed_names_are_normalized_at_every_depth() {
    let record = done(",thread-groups={group-id=\"i1\"}");
    let inner = record.get("thread_groups").and_then(|v| v.get("group_id"));
    assert_eq!(inner, Some(&bytes("i1")));
}

#[test]
fn same_name_in_different_tuples_is_fine() {
    let record = done(",a={x=\"1\"},b={x=\"2\"}");
    assert_eq!(record.get("b").and_then(|v| v.get("x")), Some(&bytes("2")));
}

#[test]
fn string_values_keep_raw_bytes() {
    assert_eq!(done(",a=\"\\200\\t\""), done_with(&[("a", Value::Bytes(vec![0x80, b'\t']))]));
}
