//! Shared test utilities for driving scripted sessions

#![allow(dead_code)]

use weightconv::cli::{Console, ScriptedLines, Session};
use weightconv::convert::Precision;

pub type TestSession = Session<ScriptedLines, Vec<u8>>;

/// Build a session that reads `lines` in order and writes into memory
pub fn session(lines: &[&str]) -> TestSession {
    let console = Console::new(ScriptedLines::new(lines.iter().copied()), Vec::new());
    Session::new(console, Precision::DEFAULT)
}

/// Everything the session has written so far, without ANSI styling
pub fn output(session: &TestSession) -> String {
    let raw = String::from_utf8_lossy(session.console.writer());
    console::strip_ansi_codes(&raw).into_owned()
}

/// Run a full script from the main menu. The script must end by choosing Exit.
pub fn run_script(lines: &[&str]) -> (String, TestSession) {
    let mut session = session(lines);
    session.run().expect("scripted session should exit cleanly");
    assert_eq!(
        session.console.source().remaining(),
        0,
        "script had unread lines"
    );
    let out = output(&session);
    (out, session)
}

/// Text printed between the first occurrence of `marker` and the next main menu
pub fn section_after<'a>(out: &'a str, marker: &str) -> &'a str {
    let start = out.find(marker).expect("marker not found") + marker.len();
    let rest = &out[start..];
    let end = rest.find("=== Main Menu ===").unwrap_or(rest.len());
    &rest[..end]
}
