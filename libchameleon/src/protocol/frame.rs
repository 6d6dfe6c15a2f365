// libchameleon/src/protocol/frame.rs

use crate::constants::{
    FRAME_MAGIC, FRAME_OVERHEAD, MAX_PAYLOAD_LEN, OFF_COMMAND, OFF_HEADER_LRC, OFF_LENGTH,
    OFF_PAYLOAD, OFF_STATUS,
};
use crate::protocol::checksum::lrc;
use crate::{Error, Result};

/// Decoded wire frame.
///
/// Wire layout:
/// `[magic(2)] [command BE u16] [reserved 0x00] [status] [len BE u16]
///  [header LRC over bytes 2..8] [payload] [payload LRC]`
///
/// Requests carry status 0x00; replies carry the device status byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub command: u16,
    pub status: u8,
    pub payload: Vec<u8>,
}

impl Frame {
    /// Encode a request frame for `command` with the given payload.
    pub fn encode(command: u16, payload: &[u8]) -> Result<Vec<u8>> {
        Self::encode_with_status(command, 0x00, payload)
    }

    /// Encode a reply frame. The engine never sends replies itself; this
    /// exists for the mock transport and test fixtures that fabricate
    /// device traffic.
    pub fn encode_reply(command: u16, status: u8, payload: &[u8]) -> Result<Vec<u8>> {
        Self::encode_with_status(command, status, payload)
    }

    fn encode_with_status(command: u16, status: u8, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::FrameTooLarge {
                len: payload.len(),
                max: MAX_PAYLOAD_LEN,
            });
        }

        let len = payload.len() as u16;
        let mut out = Vec::with_capacity(FRAME_OVERHEAD + payload.len());
        out.extend_from_slice(&FRAME_MAGIC);
        out.extend_from_slice(&command.to_be_bytes());
        out.push(0x00); // reserved
        out.push(status);
        out.extend_from_slice(&len.to_be_bytes());
        out.push(lrc(&out[OFF_COMMAND..OFF_HEADER_LRC]));
        out.extend_from_slice(payload);
        out.push(lrc(payload));
        Ok(out)
    }

    /// Decode a frame as received.
    ///
    /// Matches the device protocol's receive path: neither the magic bytes
    /// nor the two checksums are verified, only that the buffer actually
    /// holds the declared payload. Use [`Frame::decode_strict`] to verify
    /// everything.
    pub fn decode(bytes: &[u8]) -> Result<Frame> {
        if bytes.len() < FRAME_OVERHEAD - 1 {
            return Err(Error::MalformedFrame(format!(
                "frame shorter than header: {} bytes",
                bytes.len()
            )));
        }

        let command = u16::from_be_bytes([bytes[OFF_COMMAND], bytes[OFF_COMMAND + 1]]);
        let status = bytes[OFF_STATUS];
        let len = u16::from_be_bytes([bytes[OFF_LENGTH], bytes[OFF_LENGTH + 1]]) as usize;

        if bytes.len() < OFF_PAYLOAD + len {
            return Err(Error::MalformedFrame(format!(
                "declared payload of {} bytes, buffer holds {}",
                len,
                bytes.len() - OFF_PAYLOAD
            )));
        }

        Ok(Frame {
            command,
            status,
            payload: bytes[OFF_PAYLOAD..OFF_PAYLOAD + len].to_vec(),
        })
    }

    /// Decode a frame, verifying magic bytes and both checksums.
    pub fn decode_strict(bytes: &[u8]) -> Result<Frame> {
        let frame = Self::decode(bytes)?;

        if bytes[..2] != FRAME_MAGIC {
            return Err(Error::MalformedFrame(format!(
                "bad magic: {:02x} {:02x}",
                bytes[0], bytes[1]
            )));
        }

        let header_expected = lrc(&bytes[OFF_COMMAND..OFF_HEADER_LRC]);
        if bytes[OFF_HEADER_LRC] != header_expected {
            return Err(Error::ChecksumMismatch {
                expected: header_expected,
                actual: bytes[OFF_HEADER_LRC],
            });
        }

        let data_lrc_off = OFF_PAYLOAD + frame.payload.len();
        if bytes.len() < data_lrc_off + 1 {
            return Err(Error::MalformedFrame(
                "payload checksum byte missing".into(),
            ));
        }
        let data_expected = lrc(&frame.payload);
        if bytes[data_lrc_off] != data_expected {
            return Err(Error::ChecksumMismatch {
                expected: data_expected,
                actual: bytes[data_lrc_off],
            });
        }

        Ok(frame)
    }
}
