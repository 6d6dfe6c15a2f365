#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libchameleon::Error;
use libchameleon::protocol::Frame;
use libchameleon::protocol::commands::CommandCode;
use libchameleon::test_support::{session_with_log, session_with_replies};

#[test]
fn one_kilobyte_dump_uploads_in_seven_chunks() {
    let dump: Vec<u8> = (0..1024).map(|i| (i % 251) as u8).collect();
    let (mut session, log) =
        session_with_log(vec![fixtures::ok_frame(CommandCode::Mf1WriteEmuBlockData); 7]);

    session.upload_emulation_dump(&dump).unwrap();
    assert_eq!(log.len(), 7);

    let mut offset = 0usize;
    for (i, expected_block) in [0u8, 10, 20, 30, 40, 50, 60].iter().enumerate() {
        let frame = Frame::decode(&log.get(i).unwrap()).unwrap();
        assert_eq!(frame.command, CommandCode::Mf1WriteEmuBlockData.as_u16());
        assert_eq!(frame.payload[0], *expected_block);
        assert_eq!(&frame.payload[1..], &dump[offset..offset + frame.payload.len() - 1]);
        offset += frame.payload.len() - 1;
    }
    assert_eq!(offset, dump.len());
}

#[test]
fn upload_stops_at_first_rejected_chunk() {
    let dump = vec![0xEEu8; 640]; // 4 chunks
    let (mut session, log) = session_with_log(vec![
        fixtures::ok_frame(CommandCode::Mf1WriteEmuBlockData),
        fixtures::ok_frame(CommandCode::Mf1WriteEmuBlockData),
        fixtures::reply(CommandCode::Mf1WriteEmuBlockData, 0x72, &[]),
    ]);

    let err = session.upload_emulation_dump(&dump).unwrap_err();
    match err {
        Error::SequenceAborted { step, cause } => {
            assert_eq!(step, 2);
            assert!(matches!(*cause, Error::DeviceRejected(0x72)));
        }
        other => panic!("unexpected error: {other}"),
    }
    // The fourth chunk was never sent
    assert_eq!(log.len(), 3);
}

#[test]
fn single_sector_dump_fits_one_chunk() {
    // One Classic sector: three data blocks and the trailer
    let mut dump = vec![0u8; 48];
    dump.extend_from_slice(&fixtures::blank_sector_trailer());

    let (mut session, log) =
        session_with_log(vec![fixtures::ok_frame(CommandCode::Mf1WriteEmuBlockData)]);
    session.upload_emulation_dump(&dump).unwrap();

    let frame = Frame::decode(&log.get(0).unwrap()).unwrap();
    assert_eq!(frame.payload[0], 0);
    assert_eq!(frame.payload.len(), 1 + 64);
    assert_eq!(&frame.payload[49..], &fixtures::blank_sector_trailer()[..]);
}

#[test]
fn ragged_dump_is_rejected_before_any_write() {
    let (mut session, log) = session_with_log(vec![]);
    assert!(matches!(
        session.upload_emulation_dump(&[0u8; 250]),
        Err(Error::InvalidArgument(_))
    ));
    assert!(log.is_empty());
}

#[test]
fn anti_coll_config_roundtrip() {
    let mut session = session_with_replies(vec![fixtures::ok_frame(
        CommandCode::Hf14aSetAntiCollData,
    )]);
    session
        .set_anti_coll_data(&[0x04, 0x68, 0x95, 0x71, 0xFA, 0x5C, 0x64], [0x00, 0x44], 0x00)
        .unwrap();
}
