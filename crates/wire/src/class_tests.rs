// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn result_names_round_trip() {
    for class in ResultClass::ALL {
        assert_eq!(ResultClass::from_name(class.name()), Some(*class));
    }
}

#[test]
fn async_names_round_trip() {
    for class in AsyncClass::ALL {
        assert_eq!(AsyncClass::from_name(class.name()), Some(*class));
    }
}

#[test]
fn running_result_folds_into_done() {
    assert_eq!(ResultClass::from_parsed("running"), Some(ResultClass::Done));
    assert_eq!(ResultClass::from_name("running"), None);
}

#[test]
fn every_wire_name_resolves() {
    for name in ResultClass::WIRE_NAMES {
        assert!(ResultClass::from_parsed(name).is_some(), "{name}");
    }
}

#[yare::parameterized(
    thread_group_added = { AsyncClass::ThreadGroupAdded, "thread-group-added" },
    cmd_param_changed  = { AsyncClass::CmdParamChanged, "cmd-param-changed" },
    stopped            = { AsyncClass::Stopped, "stopped" },
)]
fn wire_names_use_dashes(class: AsyncClass, wire: &str) {
    assert_eq!(class.wire_name(), wire);
}

#[test]
fn names_are_not_shared_across_kinds() {
    assert_eq!(ResultClass::from_name("stopped"), None);
    assert_eq!(AsyncClass::from_name("done"), None);
}

#[test]
fn serializes_as_snake_case() {
    let json = serde_json::to_string(&AsyncClass::BreakpointModified).unwrap();
    assert_eq!(json, "\"breakpoint_modified\"");
}

#[test]
fn registered_set_sizes() {
    assert_eq!(ResultClass::ALL.len(), 4);
    assert_eq!(AsyncClass::ALL.len(), 22);
}
