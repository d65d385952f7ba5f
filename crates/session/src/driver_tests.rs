// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::FakeDebugger;
use crate::MiCommands;
use gdbmi_wire::ResultClass;

/// Records everything; asks for the version at the first prompt, then exits.
#[derive(Default)]
struct Scripted {
    started: bool,
    ended: bool,
    records: Vec<Record>,
    prompts: usize,
    exit_token: Option<u64>,
}

impl RecordHandler for Scripted {
    fn on_session_start(&mut self, _outbox: &mut Outbox) {
        self.started = true;
    }

    fn on_record(&mut self, record: Record, outbox: &mut Outbox) {
        assert!(self.started && !self.ended);
        if record.is_prompt() {
            self.prompts += 1;
            match self.prompts {
                1 => {
                    outbox.gdb_version().unwrap();
                }
                2 => self.exit_token = Some(outbox.gdb_exit().unwrap()),
                _ => {}
            }
        }
        self.records.push(record);
    }

    fn on_session_end(&mut self) {
        self.ended = true;
    }
}

#[tokio::test]
async fn handler_sees_every_record_in_order() {
    let gdb = FakeDebugger::echo();
    let mut session = AsyncSession::spawn(&gdb.config()).unwrap();
    let mut handler = Scripted::default();

    session.run(&mut handler).await.unwrap();

    assert!(handler.ended);
    let rendered: Vec<String> = handler.records.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "=thread-group-added,id=\"i1\"",
            "~\"GNU gdb (fake) 1.0\\n\"",
            "(gdb) ",
            "0^done",
            "(gdb) ",
            "1^exit",
        ]
    );
    assert_eq!(handler.exit_token, Some(1));
    assert_eq!(handler.records.last().and_then(Record::result_class), Some(ResultClass::Exit));
}

struct CloseOnPrompt {
    ended: bool,
}

impl RecordHandler for CloseOnPrompt {
    fn on_record(&mut self, record: Record, outbox: &mut Outbox) {
        if record.is_prompt() {
            outbox.close();
        }
    }

    fn on_session_end(&mut self) {
        self.ended = true;
    }
}

#[tokio::test]
async fn closing_input_ends_the_session() {
    let gdb = FakeDebugger::echo();
    let mut session = AsyncSession::spawn(&gdb.config()).unwrap();
    let mut handler = CloseOnPrompt { ended: false };

    session.run(&mut handler).await.unwrap();

    assert!(handler.ended);
    assert!(session.wait().await.unwrap().success());
}

/// Sends a command with a malformed reply, then closes at the next prompt.
#[derive(Default)]
struct BadReply {
    starts: usize,
    prompts: usize,
    ended: bool,
}

impl RecordHandler for BadReply {
    fn on_session_start(&mut self, _outbox: &mut Outbox) {
        self.starts += 1;
    }

    fn on_record(&mut self, record: Record, outbox: &mut Outbox) {
        if record.is_prompt() {
            self.prompts += 1;
            if self.prompts == 1 {
                outbox.send(&Command::new("bogus")).unwrap();
            } else {
                outbox.close();
            }
        }
    }

    fn on_session_end(&mut self) {
        self.ended = true;
    }
}

#[tokio::test]
async fn parse_error_stops_run_without_ending_the_session() {
    let gdb = FakeDebugger::echo();
    let mut session = AsyncSession::spawn(&gdb.config()).unwrap();
    let mut handler = BadReply::default();

    let err = session.run(&mut handler).await.unwrap_err();
    assert!(matches!(err, SessionError::Parse { .. }), "{err:?}");
    assert_eq!(handler.starts, 1);
    assert!(!handler.ended);

    // Resuming picks up the prompt after the bad line.
    session.run(&mut handler).await.unwrap();
    assert_eq!(handler.starts, 2);
    assert_eq!(handler.prompts, 2);
    assert!(handler.ended);
    assert!(session.wait().await.unwrap().success());
}

#[tokio::test]
async fn send_after_close_is_contract_error() {
    let gdb = FakeDebugger::echo();
    let mut session = AsyncSession::spawn(&gdb.config()).unwrap();

    session.close().await.unwrap();
    session.outbox().send_raw("-gdb-version");
    let err = session.flush().await.unwrap_err();

    assert!(matches!(err, SessionError::Contract(ContractError::InputClosed)));
}

#[tokio::test]
async fn kill_ends_the_stream() {
    let gdb = FakeDebugger::echo();
    let mut session = AsyncSession::spawn(&gdb.config()).unwrap();

    session.kill().unwrap();
    while session.next_record().await.unwrap().is_some() {}
    assert!(!session.wait().await.unwrap().success());
}

#[test]
fn outbox_tokens_increase_and_lines_queue() {
    let mut outbox = Outbox::default();
    assert_eq!(outbox.send(&Command::new("gdb-version")).unwrap(), 0);
    assert_eq!(outbox.cli_multiline(&["commands 1", "silent", "end"]).unwrap(), 1);
    assert_eq!(
        outbox.pending(),
        [
            "0-gdb-version",
            "1-interpreter-exec \"\\143\\157\\156\\163\\157\\154\\145\" \"\\143\\157\\155\\155\\141\\156\\144\\163\\040\\061\"",
            "silent",
            "end",
        ]
    );
}

#[test]
fn outbox_rejects_unencodable_commands() {
    let mut outbox = Outbox::default();
    assert!(outbox.data_evaluate_expression("π").is_err());
    assert!(outbox.pending().is_empty());
    assert_eq!(outbox.send(&Command::new("gdb-version")).unwrap(), 0);
}
