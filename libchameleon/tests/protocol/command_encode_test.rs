use libchameleon::protocol::commands::{
    RawOptions, encode_anti_coll_data, encode_hf14a_raw, encode_lf_set_emu_id, encode_lf_write,
    encode_mf_read_block, encode_mf_write_block, encode_set_slot_tag_type, encode_slot_enable,
};
use libchameleon::types::{MifareKey, TagSenseType, TagType};

#[test]
fn raw_exchange_payload_layout() {
    let options = RawOptions {
        wait_response: true,
        append_crc: true,
        auto_select: true,
        check_response_crc: true,
        ..Default::default()
    };
    let payload = encode_hf14a_raw(options, 200, &[0x60], None).unwrap();
    assert_eq!(payload, vec![0x74, 0x00, 0xC8, 0x00, 0x08, 0x60]);
}

#[test]
fn seven_bit_unlock_payload() {
    let options = RawOptions {
        keep_rf_field: true,
        wait_response: true,
        ..Default::default()
    };
    let payload = encode_hf14a_raw(options, 1, &[0x40], Some(7)).unwrap();
    assert_eq!(payload, vec![0x48, 0x00, 0x01, 0x00, 0x07, 0x40]);
}

#[test]
fn bit_count_must_describe_the_last_byte() {
    assert!(encode_hf14a_raw(RawOptions::default(), 1, &[0x40, 0x43], Some(7)).is_err());
    assert!(encode_hf14a_raw(RawOptions::default(), 1, &[0x40], Some(0)).is_err());
    assert!(encode_hf14a_raw(RawOptions::default(), 1, &[], Some(1)).is_err());
}

#[test]
fn mf_block_payloads_carry_key_a_selector() {
    let key = MifareKey::from_bytes([0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5]);
    let read = encode_mf_read_block(62, &key);
    assert_eq!(read[..2], [0x60, 62]);
    assert_eq!(&read[2..], key.as_bytes());

    let write = encode_mf_write_block(62, &key, &[0x11; 16]).unwrap();
    assert_eq!(&write[..8], &read[..]);
    assert_eq!(&write[8..], &[0x11; 16]);
    assert!(encode_mf_write_block(62, &key, &[0x11; 17]).is_err());
}

#[test]
fn slot_encoders() {
    assert_eq!(
        encode_slot_enable(7, TagSenseType::Lf, true),
        vec![7, 0x01, 0x01]
    );
    assert_eq!(
        encode_set_slot_tag_type(0, TagType::Em410x),
        vec![0, 0x00, 0x64]
    );
}

#[test]
fn lf_write_payload_carries_t55xx_keys() {
    let payload = encode_lf_write(&[0xAB, 0xCD, 0xEF, 0x01, 0x23]).unwrap();
    assert_eq!(payload.len(), 17);
    assert_eq!(
        &payload[5..],
        &[0x20, 0x20, 0x66, 0x66, 0x51, 0x24, 0x36, 0x48, 0x19, 0x92, 0x04, 0x27]
    );
    assert!(encode_lf_set_emu_id(&[0xAB, 0xCD]).is_err());
}

#[test]
fn anti_coll_payload_uses_wire_atqa_order() {
    let payload = encode_anti_coll_data(&[1, 2, 3, 4, 5, 6, 7], [0x00, 0x44], 0x00).unwrap();
    assert_eq!(payload[0], 7);
    assert_eq!(&payload[1..8], &[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(&payload[8..], &[0x44, 0x00, 0x00, 0x00]);
}
