// libchameleon/src/protocol/commands/hf.rs

//! Payload encoders for high-frequency (ISO 14443-A / Mifare) commands.

use crate::constants::{MF_BLOCK_SIZE, MF_KEY_A};
use crate::types::MifareKey;
use crate::{Error, Result};

/// Option flags for an HF14A_RAW exchange, encoded as a single bitfield
/// byte on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawOptions {
    pub activate_rf_field: bool,
    pub wait_response: bool,
    pub append_crc: bool,
    pub auto_select: bool,
    /// Keep the RF field energized after this exchange. Multi-step
    /// backdoor sequences set this on every step but the last so the tag
    /// stays powered between frames.
    pub keep_rf_field: bool,
    pub check_response_crc: bool,
}

impl RawOptions {
    pub fn bits(self) -> u8 {
        (self.activate_rf_field as u8) << 7
            | (self.wait_response as u8) << 6
            | (self.append_crc as u8) << 5
            | (self.auto_select as u8) << 4
            | (self.keep_rf_field as u8) << 3
            | (self.check_response_crc as u8) << 2
    }
}

/// HF14A_RAW payload: option bitfield, response timeout (ms, big-endian),
/// transmit bit count (big-endian), then the raw tag-bound bytes.
///
/// `bit_count` of `None` transmits all of `data` (len * 8 bits). An
/// explicit count allows short frames such as the 7-bit Gen1a unlock, but
/// must still describe the final partial byte of `data`:
/// `(len - 1) * 8 < bit_count <= len * 8`.
pub fn encode_hf14a_raw(
    options: RawOptions,
    timeout_ms: u16,
    data: &[u8],
    bit_count: Option<u16>,
) -> Result<Vec<u8>> {
    let bits = match bit_count {
        None => (data.len() * 8) as u16,
        Some(bits) => {
            if data.is_empty() {
                return Err(Error::InvalidArgument(format!(
                    "bit count {bits} given without data"
                )));
            }
            let full = (data.len() * 8) as u16;
            if bits <= full - 8 || bits > full {
                return Err(Error::InvalidArgument(format!(
                    "bit count {bits} incompatible with {} data bytes",
                    data.len()
                )));
            }
            bits
        }
    };

    let mut out = Vec::with_capacity(5 + data.len());
    out.push(options.bits());
    out.extend_from_slice(&timeout_ms.to_be_bytes());
    out.extend_from_slice(&bits.to_be_bytes());
    out.extend_from_slice(data);
    Ok(out)
}

/// MF1_READ_ONE_BLOCK payload: Key-A selector, block number, 6-byte key.
pub fn encode_mf_read_block(block: u8, key: &MifareKey) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + 6);
    out.push(MF_KEY_A);
    out.push(block);
    out.extend_from_slice(key.as_bytes());
    out
}

/// MF1_WRITE_ONE_BLOCK payload: Key-A selector, block number, 6-byte key,
/// 16 data bytes.
pub fn encode_mf_write_block(block: u8, key: &MifareKey, data: &[u8]) -> Result<Vec<u8>> {
    if data.len() != MF_BLOCK_SIZE {
        return Err(Error::InvalidLength {
            expected: MF_BLOCK_SIZE,
            actual: data.len(),
        });
    }
    let mut out = encode_mf_read_block(block, key);
    out.extend_from_slice(data);
    Ok(out)
}

/// HF14A_SET_ANTI_COLL_DATA payload: uid length, uid, ATQA in wire order
/// (low byte first), SAK, and a zero ATS placeholder.
pub fn encode_anti_coll_data(uid: &[u8], atqa: [u8; 2], sak: u8) -> Result<Vec<u8>> {
    if uid.len() != 4 && uid.len() != 7 {
        return Err(Error::InvalidArgument(format!(
            "anti-collision uid must be 4 or 7 bytes, got {}",
            uid.len()
        )));
    }
    let mut out = Vec::with_capacity(uid.len() + 5);
    out.push(uid.len() as u8);
    out.extend_from_slice(uid);
    out.push(atqa[1]);
    out.push(atqa[0]);
    out.push(sak);
    out.push(0x00); // ats
    Ok(out)
}
