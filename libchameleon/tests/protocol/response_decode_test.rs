#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libchameleon::Error;
use libchameleon::protocol::Frame;
use libchameleon::protocol::commands::CommandCode;
use libchameleon::protocol::responses::{
    ClassifiedReply, Outcome, StatusCode, decode_hf14a_scan, decode_lf_scan,
};

fn classify(frame_bytes: &[u8]) -> ClassifiedReply {
    ClassifiedReply::from_frame(Frame::decode(frame_bytes).unwrap())
}

#[test]
fn success_statuses_collapse_to_ok() {
    for status in [0x68u8, 0x40, 0x00] {
        let reply = classify(&fixtures::reply(CommandCode::GetBatteryInfo, status, &[]));
        assert_eq!(reply.outcome, Outcome::Ok);
        assert!(reply.is_ok());
    }
}

#[test]
fn failure_statuses_keep_their_byte() {
    let reply = classify(&fixtures::reply(CommandCode::Hf14aScan, 0x01, &[]));
    assert_eq!(reply.outcome, Outcome::TagNotFound);

    let reply = classify(&fixtures::reply(CommandCode::SetActiveSlot, 0x67, &[]));
    assert_eq!(reply.outcome, Outcome::DeviceRejected(0x67));
    assert_eq!(reply.status, StatusCode::InvalidCmd);

    let reply = classify(&fixtures::reply(CommandCode::Mf1ReadOneBlock, 0x08, &[]));
    assert_eq!(reply.outcome, Outcome::HfCommError(0x08));

    let reply = classify(&fixtures::reply(CommandCode::Hf14aRaw, 0xC3, &[]));
    assert_eq!(reply.outcome, Outcome::UnknownStatus(0xC3));
    assert_eq!(reply.status, StatusCode::Unknown(0xC3));
}

#[test]
fn hf_scan_record_from_wire_frame() {
    let uid = fixtures::sample_hf_uid();
    let reply = classify(&fixtures::hf_scan_frame(&uid, [0x00, 0x04], 0x08));
    let record = decode_hf14a_scan(&reply).unwrap();
    assert_eq!(record.uid(), &uid);
    assert_eq!(record.atqa(), [0x00, 0x04]);
    assert_eq!(record.sak(), 0x08);
}

#[test]
fn lf_scan_record_from_wire_frame() {
    let uid = fixtures::sample_lf_uid();
    let reply = classify(&fixtures::lf_scan_frame(&uid));
    let record = decode_lf_scan(&reply).unwrap();
    assert_eq!(record.uid(), &uid);
    assert_eq!(record.to_hex(), "4a001057c2");
}

#[test]
fn scan_decode_propagates_device_failure() {
    let reply = classify(&fixtures::reply(CommandCode::Hf14aScan, 0x01, &[]));
    assert!(matches!(decode_hf14a_scan(&reply), Err(Error::TagNotFound)));
}

#[test]
fn require_ok_converts_outcome_to_error() {
    let reply = classify(&fixtures::reply(CommandCode::Hf14aRaw, 0x02, &[]));
    assert!(matches!(reply.require_ok(), Err(Error::HfComm(0x02))));

    let reply = classify(&fixtures::reply(CommandCode::Hf14aRaw, 0x00, &[0x0A]));
    assert_eq!(reply.require_ok().unwrap(), &[0x0A]);
}
