// libchameleon/src/protocol/commands/hw.rs

//! Payload encoders for device/hardware management commands. Slot
//! arguments here are the 0-based wire indices; the session layer owns
//! the 1-based user-facing validation.

use crate::types::{HwMode, TagSenseType, TagType};

/// SET_SLOT_ENABLE payload: slot, sense type, enable flag.
pub fn encode_slot_enable(slot: u8, sense: TagSenseType, enabled: bool) -> Vec<u8> {
    vec![slot, sense as u8, enabled as u8]
}

/// SET_ACTIVE_SLOT payload.
pub fn encode_set_active_slot(slot: u8) -> Vec<u8> {
    vec![slot]
}

/// SET_SLOT_TAG_TYPE payload: slot, tag-type code big-endian.
pub fn encode_set_slot_tag_type(slot: u8, tag_type: TagType) -> Vec<u8> {
    let code = tag_type.as_u16().to_be_bytes();
    vec![slot, code[0], code[1]]
}

/// SET_SLOT_TAG_NICK payload: slot, sense type, UTF-8 name bytes.
pub fn encode_set_slot_nick(slot: u8, sense: TagSenseType, name: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + name.len());
    out.push(slot);
    out.push(sense as u8);
    out.extend_from_slice(name.as_bytes());
    out
}

/// CHANGE_DEVICE_MODE payload.
pub fn encode_set_mode(mode: HwMode) -> Vec<u8> {
    vec![mode as u8]
}
