// libchameleon/src/session/hf.rs

//! High-frequency operations: 14a scan, raw exchanges, Ultralight/NTAG
//! helpers and authenticated Mifare Classic block access.

use crate::protocol::commands::{
    CommandCode, RawOptions, encode_hf14a_raw, encode_mf_read_block, encode_mf_write_block,
};
use crate::protocol::responses::decode_hf14a_scan;
use crate::session::Session;
use crate::types::{HfTagRecord, MifareKey, VersionRecord};
use crate::{Error, Result};

/// Page size of Ultralight/NTAG memory.
const MFU_PAGE_SIZE: usize = 4;

impl Session {
    /// Scan for an ISO 14443-A tag. The result becomes the session's
    /// last HF tag; any cached version record is dropped with it.
    pub fn hf14a_scan(&mut self) -> Result<HfTagRecord> {
        let reply = self.send_command(CommandCode::Hf14aScan, &[])?;
        let record = decode_hf14a_scan(&reply)?;
        self.cache_hf_tag(record.clone());
        Ok(record)
    }

    /// Issue a raw 14a exchange and return the tag's reply bytes.
    ///
    /// `timeout_ms` here is the tag-side response window the firmware
    /// applies; the dispatcher's own reply timeout is unchanged.
    pub fn hf14a_raw(
        &mut self,
        options: RawOptions,
        timeout_ms: u16,
        data: &[u8],
        bit_count: Option<u16>,
    ) -> Result<Vec<u8>> {
        let payload = encode_hf14a_raw(options, timeout_ms, data, bit_count)?;
        let reply = self.send_command(CommandCode::Hf14aRaw, &payload)?;
        Ok(reply.require_ok()?.to_vec())
    }

    /// GET_VERSION against an Ultralight/NTAG-family tag. The record is
    /// cached for [`Session::tag_type`] refinement.
    pub fn mfu_version(&mut self) -> Result<VersionRecord> {
        let options = RawOptions {
            wait_response: true,
            append_crc: true,
            auto_select: true,
            check_response_crc: true,
            ..Default::default()
        };
        let data = self.hf14a_raw(options, 200, &[0x60], None)?;
        let record = VersionRecord::new(&data);
        self.cache_version(record.clone());
        Ok(record)
    }

    /// Read one 4-byte Ultralight/NTAG page. The tag answers reads with
    /// 16 bytes (the addressed page plus the next three).
    pub fn mfu_read_page(&mut self, page: u8) -> Result<Vec<u8>> {
        let options = RawOptions {
            wait_response: true,
            append_crc: true,
            auto_select: true,
            check_response_crc: true,
            ..Default::default()
        };
        self.hf14a_raw(options, 200, &[0x30, page], None)
    }

    /// Write one 4-byte Ultralight/NTAG page.
    pub fn mfu_write_page(&mut self, page: u8, data: &[u8]) -> Result<()> {
        if data.len() != MFU_PAGE_SIZE {
            return Err(Error::InvalidLength {
                expected: MFU_PAGE_SIZE,
                actual: data.len(),
            });
        }
        // The tag acks a page write with a 4-bit ACK, so the response
        // CRC check stays off.
        let options = RawOptions {
            wait_response: true,
            append_crc: true,
            auto_select: true,
            ..Default::default()
        };
        let mut frame = Vec::with_capacity(2 + MFU_PAGE_SIZE);
        frame.extend_from_slice(&[0xA2, page]);
        frame.extend_from_slice(data);
        self.hf14a_raw(options, 200, &frame, None)?;
        Ok(())
    }

    /// Read one Mifare Classic block, authenticating with `key` or the
    /// session default.
    pub fn mf_read_block(&mut self, block: u8, key: Option<&MifareKey>) -> Result<Vec<u8>> {
        let key = key.copied().unwrap_or(*self.mifare_key());
        let payload = encode_mf_read_block(block, &key);
        let reply = self.send_command(CommandCode::Mf1ReadOneBlock, &payload)?;
        Ok(reply.require_ok()?.to_vec())
    }

    /// Write one 16-byte Mifare Classic block, authenticating with `key`
    /// or the session default.
    pub fn mf_write_block(&mut self, block: u8, key: Option<&MifareKey>, data: &[u8]) -> Result<()> {
        let key = key.copied().unwrap_or(*self.mifare_key());
        let payload = encode_mf_write_block(block, &key, data)?;
        self.send_command(CommandCode::Mf1WriteOneBlock, &payload)?
            .require_ok()?;
        Ok(())
    }

    /// HLTA: end the current exchange and drop the RF field.
    pub fn halt(&mut self) -> Result<()> {
        let options = RawOptions {
            append_crc: true,
            ..Default::default()
        };
        self.hf14a_raw(options, 1, &[0x50, 0x00], None)?;
        Ok(())
    }
}
