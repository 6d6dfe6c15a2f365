//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::protocol::Frame;
use crate::protocol::commands::CommandCode;
use crate::session::Session;
use crate::transport::{MockTransport, SentLog};

/// Encode a device reply frame for the given command.
#[doc(hidden)]
pub fn reply_frame(command: CommandCode, status: u8, payload: &[u8]) -> Vec<u8> {
    Frame::encode_reply(command.as_u16(), status, payload)
        .expect("test payload within frame limits")
}

/// Session over a mock transport pre-seeded with reply frames, delivered
/// one per write in queue order.
#[doc(hidden)]
pub fn session_with_replies(replies: Vec<Vec<u8>>) -> Session {
    session_with_log(replies).0
}

/// Like [`session_with_replies`], but also hands back the log of frames
/// the session writes, for asserting on outbound wire bytes.
#[doc(hidden)]
pub fn session_with_log(replies: Vec<Vec<u8>>) -> (Session, SentLog) {
    let mut mock = MockTransport::new();
    for reply in replies {
        mock.push_reply(reply);
    }
    let log = mock.sent_log();
    let session = Session::new(Box::new(mock)).expect("mock session setup");
    (session, log)
}
