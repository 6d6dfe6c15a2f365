#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libchameleon::Error;
use libchameleon::protocol::Frame;
use libchameleon::protocol::commands::CommandCode;
use libchameleon::test_support::{session_with_log, session_with_replies};

#[test]
fn unlock_nak_aborts_before_second_step() {
    let (mut session, log) = session_with_log(vec![fixtures::gen1a_nak_frame(0x00)]);

    let err = session.gen1a_unlock().unwrap_err();
    match err {
        Error::SequenceAborted { step, cause } => {
            assert_eq!(step, 0);
            assert!(matches!(*cause, Error::TagNak { got: 0x00 }));
        }
        other => panic!("unexpected error: {other}"),
    }

    // Only the 7-bit 0x40 frame went out; 0x43 was never attempted
    assert_eq!(log.len(), 1);
    let frame = Frame::decode(&log.get(0).unwrap()).unwrap();
    assert_eq!(frame.payload.last(), Some(&0x40));
}

#[test]
fn write_block_sends_unlock_announce_data_in_order() {
    let (mut session, log) = session_with_log(vec![
        fixtures::gen1a_ack_frame(),
        fixtures::gen1a_ack_frame(),
        fixtures::gen1a_ack_frame(),
        fixtures::gen1a_ack_frame(),
    ]);
    session.gen1a_write_block(2, &[0x77; 16]).unwrap();

    let tag_bytes: Vec<Vec<u8>> = log
        .all()
        .iter()
        .map(|raw| Frame::decode(raw).unwrap().payload[5..].to_vec())
        .collect();
    assert_eq!(tag_bytes[0], vec![0x40]);
    assert_eq!(tag_bytes[1], vec![0x43]);
    assert_eq!(tag_bytes[2], vec![0xA0, 0x02]);
    assert_eq!(tag_bytes[3], vec![0x77; 16]);
}

#[test]
fn set_uid_full_exchange() {
    let old_uid = [0xCA, 0xFE, 0xBA, 0xBE];
    let new_uid = [0xDE, 0xAD, 0xBE, 0xEF];
    let (mut session, log) = session_with_log(vec![
        fixtures::reply(
            CommandCode::Mf1ReadOneBlock,
            0x00,
            &fixtures::classic_block0(&old_uid),
        ),
        fixtures::reply(CommandCode::Hf14aRaw, 0x00, &[]), // halt
        fixtures::gen1a_ack_frame(),
        fixtures::gen1a_ack_frame(),
        fixtures::gen1a_ack_frame(),
        fixtures::gen1a_ack_frame(),
        fixtures::reply(CommandCode::Hf14aRaw, 0x00, &[]), // halt
    ]);

    session.set_uid(&new_uid).unwrap();
    assert_eq!(log.len(), 7);

    // The rewritten block keeps everything after uid+bcc from the old one
    let written = Frame::decode(&log.get(5).unwrap()).unwrap().payload[5..].to_vec();
    assert_eq!(&written[..4], &new_uid);
    assert_eq!(written[4], 0xDE ^ 0xAD ^ 0xBE ^ 0xEF);
    assert_eq!(&written[5..], &fixtures::classic_block0(&old_uid)[5..]);
}

#[test]
fn set_uid_halt_failure_is_distinguishable() {
    let old_uid = [0xCA, 0xFE, 0xBA, 0xBE];
    let mut session = session_with_replies(vec![
        fixtures::reply(
            CommandCode::Mf1ReadOneBlock,
            0x00,
            &fixtures::classic_block0(&old_uid),
        ),
        fixtures::reply(CommandCode::Hf14aRaw, 0x66, &[]), // halt rejected
    ]);

    let err = session.set_uid(&[1, 2, 3, 4]).unwrap_err();
    match err {
        Error::SequenceAborted { step, cause } => {
            assert_eq!(step, 1);
            assert!(matches!(*cause, Error::DeviceRejected(0x66)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn gen1a_read_block_unlocks_then_returns_raw_payload() {
    let (mut session, log) = session_with_log(vec![
        fixtures::gen1a_ack_frame(),
        fixtures::gen1a_ack_frame(),
        fixtures::reply(CommandCode::Hf14aRaw, 0x00, &[0x42; 16]),
    ]);
    let block = session.gen1a_read_block(0).unwrap();
    assert_eq!(block, vec![0x42; 16]);

    let tag_bytes: Vec<Vec<u8>> = log
        .all()
        .iter()
        .map(|raw| Frame::decode(raw).unwrap().payload[5..].to_vec())
        .collect();
    assert_eq!(tag_bytes[0], vec![0x40]);
    assert_eq!(tag_bytes[1], vec![0x43]);
    assert_eq!(tag_bytes[2], vec![0x30, 0x00]);
}

#[test]
fn gen1a_read_block_aborts_without_reading_on_nak() {
    let (mut session, log) = session_with_log(vec![fixtures::gen1a_nak_frame(0x00)]);
    let err = session.gen1a_read_block(0).unwrap_err();
    assert!(matches!(err, Error::SequenceAborted { step: 0, .. }));
    assert_eq!(log.len(), 1);
}
