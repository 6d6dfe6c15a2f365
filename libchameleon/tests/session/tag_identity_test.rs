#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libchameleon::protocol::commands::CommandCode;
use libchameleon::tag;
use libchameleon::test_support::session_with_replies;
use libchameleon::types::{TagType, VersionRecord};
use libchameleon::Error;

#[test]
fn sak_only_classification() {
    assert_eq!(tag::classify(0x00, None), TagType::Mf0Icu1);
    assert_eq!(tag::classify(0x08, None), TagType::Mifare1k);
    assert_eq!(tag::classify(0x20, None), TagType::Iso14443_4);
    assert_eq!(tag::classify(0x77, None), TagType::Undefined);
}

#[test]
fn version_record_refines_ultralight_class() {
    let ntag213 = VersionRecord::new(&fixtures::version_payload(0x04, 4, 0x0F));
    assert_eq!(tag::classify(0x00, Some(&ntag213)), TagType::Ntag213);

    let ulev1 = VersionRecord::new(&fixtures::version_payload(0x04, 3, 0x0E));
    assert_eq!(tag::classify(0x00, Some(&ulev1)), TagType::Mf0Ul21);
}

#[test]
fn scan_then_version_then_classify() {
    let uid = fixtures::sample_hf_uid();
    let mut session = session_with_replies(vec![
        fixtures::hf_scan_frame(&uid, [0x00, 0x44], 0x00),
        fixtures::version_frame(0x04, 4, 0x11),
    ]);

    session.hf14a_scan().unwrap();
    // SAK alone says undifferentiated Ultralight
    assert_eq!(session.tag_type().unwrap(), TagType::Mf0Icu1);

    session.mfu_version().unwrap();
    assert_eq!(session.tag_type().unwrap(), TagType::Ntag215);
}

#[test]
fn rescan_drops_the_version_refinement() {
    let uid = fixtures::sample_hf_uid();
    let mut session = session_with_replies(vec![
        fixtures::hf_scan_frame(&uid, [0x00, 0x44], 0x00),
        fixtures::version_frame(0x04, 4, 0x13),
        fixtures::hf_scan_frame(&uid, [0x00, 0x44], 0x00),
    ]);

    session.hf14a_scan().unwrap();
    session.mfu_version().unwrap();
    assert_eq!(session.tag_type().unwrap(), TagType::Ntag216);

    session.hf14a_scan().unwrap();
    assert_eq!(session.tag_type().unwrap(), TagType::Mf0Icu1);
}

#[test]
fn classification_requires_a_scan() {
    let mut session = session_with_replies(vec![fixtures::reply(
        CommandCode::Hf14aScan,
        0x01,
        &[],
    )]);
    assert!(session.hf14a_scan().is_err());
    assert!(matches!(session.tag_type(), Err(Error::TagNotFound)));
}
